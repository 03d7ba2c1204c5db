use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::models::beer::Beer;
use crate::domain::repositories::{BeerRepository, RepositoryError};

#[derive(Debug, Default)]
pub struct InMemoryBeerRepository {
    beers: RwLock<HashMap<Uuid, Beer>>,
}

impl InMemoryBeerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BeerRepository for InMemoryBeerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Beer>, RepositoryError> {
        let beers = self.beers.read().await;
        Ok(beers.get(&id).cloned())
    }

    async fn save(&self, mut beer: Beer) -> Result<Beer, RepositoryError> {
        // 整个检查-写入过程持有写锁
        let mut beers = self.beers.write().await;

        if let Some(stored) = beers.get(&beer.id) {
            if stored.version != beer.version {
                return Err(RepositoryError::Conflict {
                    id: beer.id,
                    expected: beer.version,
                    found: stored.version,
                });
            }
            beer.version += 1;
        }

        beers.insert(beer.id, beer.clone());
        tracing::debug!(id = %beer.id, version = beer.version, "Beer saved");

        Ok(beer)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.beers.read().await.len() as u64)
    }
}
