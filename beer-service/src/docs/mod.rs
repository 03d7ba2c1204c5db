//! 接口文档片段
//!
//! 字段描述与 `BeerDto` 放在一起维护，由 `beer-service docs` 子命令
//! 输出为 asciidoc 表格，集成测试用同一套描述校验实际响应。

pub mod beer;
pub mod descriptor;
pub mod snippet;

use thiserror::Error;

pub use descriptor::{verify_payload, FieldDescriptor, FieldType, ParameterDescriptor};
pub use snippet::write_snippets;

#[derive(Error, Debug)]
pub enum DocsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Payload is not a JSON object")]
    NotAnObject,

    #[error("Undocumented fields in payload: {0:?}")]
    UndocumentedFields(Vec<String>),

    #[error("Documented fields missing from payload: {0:?}")]
    MissingFields(Vec<String>),
}
