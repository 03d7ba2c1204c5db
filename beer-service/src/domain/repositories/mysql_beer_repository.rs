use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};
use uuid::Uuid;

use crate::domain::models::beer::{Beer, BeerStyle};
use crate::domain::repositories::{BeerRepository, RepositoryError};

const SELECT_BEER: &str = r#"
    SELECT id, version, created_date, last_modified_date, beer_name, beer_style,
           upc, price, quantity_on_hand
    FROM beer
    WHERE id = ?
"#;

#[derive(Debug, FromRow)]
struct BeerRecord {
    id: Uuid,
    version: i64,
    created_date: DateTime<Utc>,
    last_modified_date: DateTime<Utc>,
    beer_name: String,
    beer_style: String,
    upc: i64,
    price: Decimal,
    quantity_on_hand: i32,
}

impl TryFrom<BeerRecord> for Beer {
    type Error = RepositoryError;

    fn try_from(record: BeerRecord) -> Result<Self, Self::Error> {
        let beer_style = BeerStyle::from_str(&record.beer_style).map_err(|_| {
            RepositoryError::InvalidRecord(format!(
                "beer {} has unknown style {}",
                record.id, record.beer_style
            ))
        })?;

        Ok(Beer {
            id: record.id,
            version: record.version,
            created_date: record.created_date,
            last_modified_date: record.last_modified_date,
            beer_name: record.beer_name,
            beer_style,
            upc: record.upc,
            price: record.price,
            quantity_on_hand: record.quantity_on_hand,
        })
    }
}

pub struct MySqlBeerRepository {
    pool: MySqlPool,
}

impl MySqlBeerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn stored_version(&self, id: Uuid) -> Result<Option<i64>, RepositoryError> {
        let version = sqlx::query_scalar("SELECT version FROM beer WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(version)
    }
}

/// 条件 UPDATE 未命中时，按重新读取到的版本生成错误
fn lost_update(id: Uuid, expected: i64, found: Option<i64>) -> RepositoryError {
    match found {
        Some(found) => RepositoryError::Conflict { id, expected, found },
        None => RepositoryError::InvalidRecord(format!("beer {} was removed during update", id)),
    }
}

#[async_trait]
impl BeerRepository for MySqlBeerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Beer>, RepositoryError> {
        let record = sqlx::query_as::<_, BeerRecord>(SELECT_BEER)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        record.map(Beer::try_from).transpose()
    }

    async fn save(&self, mut beer: Beer) -> Result<Beer, RepositoryError> {
        let stored_version = self.stored_version(beer.id).await?;

        let Some(stored_version) = stored_version else {
            sqlx::query(
                r#"
                INSERT INTO beer (id, version, created_date, last_modified_date, beer_name,
                                  beer_style, upc, price, quantity_on_hand)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
                .bind(beer.id)
                .bind(beer.version)
                .bind(beer.created_date)
                .bind(beer.last_modified_date)
                .bind(&beer.beer_name)
                .bind(beer.beer_style.to_string())
                .bind(beer.upc)
                .bind(beer.price)
                .bind(beer.quantity_on_hand)
                .execute(&self.pool)
                .await?;

            return Ok(beer);
        };

        if stored_version != beer.version {
            return Err(RepositoryError::Conflict {
                id: beer.id,
                expected: beer.version,
                found: stored_version,
            });
        }

        // 版本条件保证并发写入时只有一个成功
        let result = sqlx::query(
            r#"
            UPDATE beer
            SET version = ?, last_modified_date = ?, beer_name = ?, beer_style = ?,
                upc = ?, price = ?, quantity_on_hand = ?
            WHERE id = ? AND version = ?
            "#,
        )
            .bind(beer.version + 1)
            .bind(beer.last_modified_date)
            .bind(&beer.beer_name)
            .bind(beer.beer_style.to_string())
            .bind(beer.upc)
            .bind(beer.price)
            .bind(beer.quantity_on_hand)
            .bind(beer.id)
            .bind(beer.version)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            let found = self.stored_version(beer.id).await?;
            return Err(lost_update(beer.id, beer.version, found));
        }

        beer.version += 1;
        Ok(beer)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM beer")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(beer_style: &str) -> BeerRecord {
        let now = Utc::now();
        BeerRecord {
            id: Uuid::new_v4(),
            version: 3,
            created_date: now,
            last_modified_date: now,
            beer_name: "Galaxy Cat".to_string(),
            beer_style: beer_style.to_string(),
            upc: 337010000002,
            price: dec!(11.95),
            quantity_on_hand: 200,
        }
    }

    #[test]
    fn test_lost_update_reports_stored_version() {
        let id = Uuid::new_v4();

        match lost_update(id, 2, Some(4)) {
            RepositoryError::Conflict { id: conflict_id, expected, found } => {
                assert_eq!(conflict_id, id);
                assert_eq!(expected, 2);
                assert_eq!(found, 4);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        assert!(matches!(lost_update(id, 2, None), RepositoryError::InvalidRecord(_)));
    }

    #[test]
    fn test_record_into_beer() {
        let beer = Beer::try_from(record("PALE_ALE")).unwrap();
        assert_eq!(beer.beer_style, BeerStyle::PaleAle);
        assert_eq!(beer.version, 3);

        let err = Beer::try_from(record("CIDER")).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidRecord(_)));
    }
}
