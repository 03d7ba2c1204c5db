use std::path::PathBuf;

use beer_service::bootstrap::load_sample_beers;
use beer_service::config::Config;
use beer_service::docs::write_snippets;
use beer_service::logging::init_logging;
use beer_service::{create_app, AppError, AppState};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "beer-service")]
#[command(about = "Beer 资源 REST 服务", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 启动 HTTP 服务（默认）
    Serve,

    /// 生成接口文档片段
    Docs {
        /// 输出目录
        #[arg(short, long, default_value = "target/generated-snippets")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 加载环境变量
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    init_logging(&config.logging)?;
    tracing::debug!(backend = %config.storage.backend, listen = %config.listen_addr(), "Configuration loaded");

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Docs { out } => {
            let written = write_snippets(&out)?;
            tracing::info!("Wrote {} snippets to {}", written.len(), out.display());
            Ok(())
        }
    }
}

async fn serve(config: Config) -> Result<(), AppError> {
    tracing::info!("Starting beer service");

    let app_state = AppState::from_config(config.clone()).await?;

    if config.bootstrap.load_sample_data {
        load_sample_beers(app_state.beer_repository.as_ref()).await?;
    }

    // 创建并启动服务器
    let app = create_app(app_state);
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", &addr);

    axum::serve(listener, app).await?;
    Ok(())
}
