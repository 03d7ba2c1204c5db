use rust_decimal::Decimal;

use crate::domain::models::beer::{Beer, BeerStyle};
use crate::domain::repositories::BeerRepository;
use crate::error::AppError;

/// 仓储为空时写入两条示例数据，返回写入的条数
pub async fn load_sample_beers(repository: &dyn BeerRepository) -> Result<usize, AppError> {
    if repository.count().await? > 0 {
        tracing::debug!("Repository already populated, skipping sample data");
        return Ok(0);
    }

    let samples = [
        Beer::new("Mango Bobs", BeerStyle::Ale, 337010000001, Decimal::new(1295, 2))
            .with_quantity_on_hand(200),
        Beer::new("Galaxy Cat", BeerStyle::PaleAle, 337010000002, Decimal::new(1195, 2))
            .with_quantity_on_hand(200),
    ];

    let total = samples.len();
    for beer in samples {
        let beer = repository.save(beer).await?;
        tracing::info!(id = %beer.id, name = %beer.beer_name, "Sample beer loaded");
    }

    Ok(total)
}
