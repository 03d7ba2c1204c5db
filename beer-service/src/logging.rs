use crate::config::{LogFormat, LoggingConfig};
use crate::error::AppError;
use tracing_subscriber::{
    fmt, prelude::*, registry, EnvFilter,
};

/// RUST_LOG 优先于配置文件中的日志级别
pub fn init_logging(config: &LoggingConfig) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let formatting_layer = match config.format {
        LogFormat::Json => fmt::layer().json().boxed(),
        LogFormat::Compact => fmt::layer().compact().boxed(),
        LogFormat::Pretty => fmt::layer().pretty().boxed(),
    };

    registry()
        .with(env_filter)
        .with(formatting_layer)
        .try_init()
        .map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(level = %config.level, format = %config.format, "Logging initialized");

    Ok(())
}
