use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, StorageBackend};
use dotenvy::dotenv;
use migration::MigratorTrait;
use service::{
    country::{seaorm::SeaOrmCountryStore, service::CountryService, store::CountryStore},
    file::country_store::JsonCountryStore,
    runtime,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Open the store selected by `[storage].backend`.
pub async fn build_store(cfg: &AppConfig) -> Result<Arc<dyn CountryStore>, StartupError> {
    let store: Arc<dyn CountryStore> = match cfg.storage.backend {
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None)
                .await
                .map_err(|e| StartupError::Storage(e.to_string()))?;
            Arc::new(SeaOrmCountryStore::new(db))
        }
        StorageBackend::File => {
            runtime::ensure_data_dir(&cfg.storage.file_path).await?;
            JsonCountryStore::new(&cfg.storage.file_path).await?
        }
        StorageBackend::Memory => JsonCountryStore::in_memory(),
    };
    info!(backend = ?cfg.storage.backend, "country store ready");
    Ok(store)
}

pub fn build_app(store: Arc<dyn CountryStore>) -> Router {
    let state = AppState { countries: CountryService::new(store) };
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(err = %e, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = AppConfig::load_and_validate()?;
    let store = build_store(&cfg).await?;
    let app = build_app(store);

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting country service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
