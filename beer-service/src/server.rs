use axum::{
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::beers;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::{BeerRepository, InMemoryBeerRepository, MySqlBeerRepository};
use crate::error::AppError;
use crate::infrastructure::database::mysql::init_mysql;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub beer_repository: Arc<dyn BeerRepository>,
}

impl AppState {
    pub fn new(config: Config, beer_repository: Arc<dyn BeerRepository>) -> Self {
        Self { config, beer_repository }
    }

    /// 按配置选择仓储实现
    pub async fn from_config(config: Config) -> Result<Self, AppError> {
        let beer_repository: Arc<dyn BeerRepository> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(InMemoryBeerRepository::new()),
            StorageBackend::Mysql => {
                let pool = init_mysql(&config.storage).await?;
                Arc::new(MySqlBeerRepository::new(pool))
            }
        };

        tracing::info!(backend = %config.storage.backend, "Beer repository ready");

        Ok(Self::new(config, beer_repository))
    }
}

pub fn create_app(state: AppState) -> Router {
    let app_state = Arc::new(state);

    // 健康检查路由
    let health_route = Router::new()
        .route("/health", get(|| async { Json(json!({ "status": "UP" })) }));

    // 组合所有路由
    Router::new()
        .merge(beers::routes())
        .merge(health_route)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(app_state)
}
