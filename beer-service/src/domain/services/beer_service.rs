use std::sync::Arc;
use uuid::Uuid;

use crate::domain::dtos::beer_dto::BeerDto;
use crate::domain::models::beer::{Beer, BeerChanges};
use crate::domain::repositories::BeerRepository;
use crate::error::AppError;

pub struct BeerService {
    repository: Arc<dyn BeerRepository>,
}

impl BeerService {
    pub fn new(repository: Arc<dyn BeerRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_by_id(&self, id: Uuid, is_cold: Option<&str>) -> Result<BeerDto, AppError> {
        // isCold 只做演示，不影响查询
        tracing::debug!(%id, is_cold = ?is_cold, "Fetching beer");

        let beer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Beer with ID {} not found", id)))?;

        Ok(BeerDto::from(beer))
    }

    pub async fn create(&self, dto: BeerDto) -> Result<BeerDto, AppError> {
        let mut ignored = dto.server_assigned_fields();
        if dto.quantity_on_hand.is_some() {
            ignored.push("quantityOnHand");
        }

        // 创建时库存由服务端置 0，传入值不参与校验
        let dto = BeerDto { quantity_on_hand: None, ..dto };

        // 校验失败时不触碰仓储
        let changes = BeerChanges::try_from(dto)?;

        if !ignored.is_empty() {
            tracing::warn!(fields = ?ignored, "Ignoring server assigned fields on create");
        }

        let beer = self.repository.save(Beer::from(changes)).await?;
        tracing::info!(id = %beer.id, name = %beer.beer_name, "Beer created");

        Ok(BeerDto::from(beer))
    }

    pub async fn update(&self, id: Uuid, dto: BeerDto) -> Result<(), AppError> {
        let ignored = dto.server_assigned_fields();
        let changes = BeerChanges::try_from(dto)?;

        if !ignored.is_empty() {
            tracing::warn!(%id, fields = ?ignored, "Ignoring server assigned fields on update");
        }

        // 检查啤酒是否存在
        let mut beer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Beer with ID {} not found", id)))?;

        beer.apply(changes);

        let beer = self.repository.save(beer).await?;
        tracing::info!(%id, version = beer.version, "Beer updated");

        Ok(())
    }
}
