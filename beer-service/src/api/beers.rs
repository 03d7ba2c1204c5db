use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::extract::ApiJson;
use crate::domain::dtos::beer_dto::BeerDto;
use crate::domain::services::beer_service::BeerService;
use crate::error::AppError;
use crate::server::AppState;

pub const BEER_PATH: &str = "/api/v1/beer/";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(BEER_PATH, post(save_new_beer))
        .route("/api/v1/beer/{beer_id}", get(get_beer_by_id).put(update_beer_by_id))
}

#[derive(Debug, Deserialize)]
pub struct GetBeerParams {
    #[serde(rename = "isCold")]
    pub is_cold: Option<String>,
}

async fn get_beer_by_id(
    State(state): State<Arc<AppState>>,
    Path(beer_id): Path<Uuid>,
    Query(params): Query<GetBeerParams>,
) -> Result<Json<BeerDto>, AppError> {
    let beer_service = BeerService::new(state.beer_repository.clone());

    let beer = beer_service.get_by_id(beer_id, params.is_cold.as_deref()).await?;

    Ok(Json(beer))
}

async fn save_new_beer(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<BeerDto>,
) -> Result<impl IntoResponse, AppError> {
    let beer_service = BeerService::new(state.beer_repository.clone());

    let beer = beer_service.create(payload).await?;
    let id = beer
        .id
        .ok_or_else(|| AppError::Internal("Created beer has no id".to_string()))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("{}{}", BEER_PATH, id))],
        Json(beer),
    ))
}

async fn update_beer_by_id(
    State(state): State<Arc<AppState>>,
    Path(beer_id): Path<Uuid>,
    ApiJson(payload): ApiJson<BeerDto>,
) -> Result<StatusCode, AppError> {
    let beer_service = BeerService::new(state.beer_repository.clone());

    beer_service.update(beer_id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}
