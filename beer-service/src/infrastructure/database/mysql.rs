use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use crate::config::StorageConfig;
use crate::error::AppError;

pub async fn init_mysql(config: &StorageConfig) -> Result<MySqlPool, AppError> {
    tracing::info!("Initializing MySQL connection pool");

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    init_schema(&pool).await?;

    Ok(pool)
}

// 初始化数据库表
pub async fn init_schema(pool: &MySqlPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS beer (
            id BINARY(16) NOT NULL PRIMARY KEY,
            version BIGINT NOT NULL,
            created_date TIMESTAMP NOT NULL,
            last_modified_date TIMESTAMP NOT NULL,
            beer_name VARCHAR(100) NOT NULL,
            beer_style VARCHAR(30) NOT NULL,
            upc BIGINT NOT NULL,
            price DECIMAL(19, 2) NOT NULL,
            quantity_on_hand INT NOT NULL DEFAULT 0,
            INDEX idx_upc (upc)
        )
        "#
    )
        .execute(pool)
        .await?;

    Ok(())
}
