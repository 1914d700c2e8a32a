use std::{path::Path, sync::Arc};

use axum::Router;
use configs::{AppConfig, LogFormat};
use service::blog::{BlogRepository, SeaOrmBlogRepository};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `CONFIG_PATH` (default `config.toml`) when it exists, otherwise
/// build the config from environment variables. Either way it is validated.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        return AppConfig::load_and_validate();
    }
    let mut cfg = AppConfig::from_env();
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

/// Initialize logging via shared common utils
pub fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => common::utils::logging::init_logging_default(),
        LogFormat::Json => common::utils::logging::init_logging_json(),
    }
}

/// Wire the SeaORM repository into the router.
pub fn build_app(db: sea_orm::DatabaseConnection) -> Router {
    let repo: Arc<dyn BlogRepository> = Arc::new(SeaOrmBlogRepository::new(db));
    routes::build_router(ServerState::new(repo), build_cors())
}

/// Public entry: connect, migrate, build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    common::env::ensure_sqlite_dir(&cfg.database.url).await?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::migrate(&db).await?;
    info!("migrations applied");

    let app = build_app(db);

    let listener = tokio::net::TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting server");
    axum::serve(listener, app).await?;
    Ok(())
}
