use serde_json::Value;
use strum_macros::Display;

use crate::docs::DocsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FieldType {
    #[strum(serialize = "UUID")]
    Uuid,
    Long,
    Integer,
    Decimal,
    String,
    Timestamp,
    Enum,
}

/// 请求或响应中的一个字段
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub path: &'static str,
    pub field_type: FieldType,
    pub description: &'static str,
    pub constraints: Vec<String>,
    pub ignored: bool,
    pub optional: bool,
}

impl FieldDescriptor {
    pub fn field_with_path(path: &'static str) -> Self {
        Self {
            path,
            field_type: FieldType::String,
            description: "",
            constraints: Vec::new(),
            ignored: false,
            optional: false,
        }
    }

    pub fn of_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn constraints<I, S>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints = constraints.into_iter().map(Into::into).collect();
        self
    }

    /// 文档中不展示，校验载荷时视为已记录
    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn constraint_text(&self) -> String {
        self.constraints.join(". ")
    }
}

/// 路径参数或查询参数
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

pub fn parameter_with_name(name: &'static str, description: &'static str) -> ParameterDescriptor {
    ParameterDescriptor { name, description }
}

/// 对照字段描述检查 JSON 载荷
///
/// 载荷中出现了未记录的字段，或者缺少必填的已记录字段时返回错误。
pub fn verify_payload(payload: &Value, fields: &[FieldDescriptor]) -> Result<(), DocsError> {
    let object = payload.as_object().ok_or(DocsError::NotAnObject)?;

    let mut undocumented: Vec<String> = object
        .keys()
        .filter(|key| !fields.iter().any(|field| field.path == key.as_str()))
        .cloned()
        .collect();

    if !undocumented.is_empty() {
        undocumented.sort();
        return Err(DocsError::UndocumentedFields(undocumented));
    }

    let missing: Vec<String> = fields
        .iter()
        .filter(|field| !field.ignored && !field.optional)
        .filter(|field| !object.contains_key(field.path))
        .map(|field| field.path.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(DocsError::MissingFields(missing));
    }

    Ok(())
}
