//! Debts Service Library
//!
//! Records customer debts and lists them by document.
//! It can be run as a standalone service or embedded in the combined binary.

pub mod config;
pub mod handlers;
pub mod infra;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::DebtsServiceConfig;
use crate::infra::Migrator;
use crate::repository::DebtStore;
use crate::service::DebtManager;
use crate::state::AppState;
use common::{Database, HealthProbe, MigrateAction};

pub use routes::create_router;

/// Run the debts service as an embedded component (for combined binary).
pub async fn run_embedded(
    host: Option<&str>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = DebtsServiceConfig::from_env()?;
    if let Some(host) = host {
        config.server.host = host.to_string();
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    run_server_with_config(config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = DebtsServiceConfig::from_env()?;
    common::run_migrate_action::<Migrator>(&config.database, action).await?;
    Ok(())
}

pub fn build_state(db: &Database) -> AppState {
    let debt_repo = Arc::new(DebtStore::new(db.get_connection()));
    let debt_service = Arc::new(DebtManager::new(debt_repo));

    let probes: Vec<Arc<dyn HealthProbe>> = vec![Arc::new(db.clone())];
    AppState::new(debt_service, probes)
}

async fn run_server_with_config(
    config: DebtsServiceConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let db = Database::connect::<Migrator>(&config.database).await?;
    let app = create_router(build_state(&db));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Debts service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
