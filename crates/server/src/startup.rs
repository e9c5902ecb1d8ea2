use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use service::Services;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or `CONFIG_PATH`), falling back to environment
/// variables when the file does not exist.
pub fn load_config() -> Result<AppConfig, StartupError> {
    dotenv().ok();
    let path = configs::config_path();
    let cfg = if std::path::Path::new(&path).exists() {
        AppConfig::load_and_validate()
    } else {
        AppConfig::from_env()
    };
    cfg.map_err(|e| StartupError::InvalidConfig(format!("{e:#}")))
}

/// Storage-backed services for the configured database.
pub async fn build_services(cfg: &AppConfig) -> Result<Services, StartupError> {
    if cfg.database.is_memory() {
        warn!("database.url is memory://, data will not survive a restart");
        return Ok(Services::in_memory());
    }
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(format!("{e:#}")))?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Migration(e.to_string()))?;
        info!("migrations applied");
    }
    Ok(Services::seaorm(db))
}

pub fn app(services: Services) -> Router {
    routes::build_router(services, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Build the app from `cfg` and serve it until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let services = build_services(&cfg).await?;
    let app = app(services);

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, memory = cfg.database.is_memory(), "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}
