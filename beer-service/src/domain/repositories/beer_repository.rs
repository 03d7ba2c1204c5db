use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::models::beer::Beer;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Beer {id} was modified concurrently: expected version {expected}, found {found}")]
    Conflict { id: Uuid, expected: i64, found: i64 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

/// 啤酒仓储
///
/// `save` 对不存在的 id 执行插入；对已存在的记录要求 `beer.version`
/// 与存储中的版本一致，成功后版本号加一并返回保存后的实体。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BeerRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Beer>, RepositoryError>;
    async fn save(&self, beer: Beer) -> Result<Beer, RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
}
