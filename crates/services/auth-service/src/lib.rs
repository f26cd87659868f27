//! Auth Service Library
//!
//! User registration and login over HTTP. Sessions are persisted and
//! returned to the caller as signed bearer tokens.
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

use crate::config::AuthServiceConfig;
use crate::infra::Migrator;
use crate::repository::{SessionStore, UserStore};
use crate::service::{Authenticator, TokenIssuer, UserManager};
use crate::state::AppState;
use common::{Database, HealthProbe, MigrateAction};

pub use routes::create_router;

/// Run the auth service as an embedded component (for combined binary).
///
/// `host`/`port` override the configured listener when given.
pub async fn run_embedded(
    host: Option<&str>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = AuthServiceConfig::from_env()?;
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
    let config = AuthServiceConfig::from_env()?;
    common::run_migrate_action::<Migrator>(&config.database, action).await?;
    Ok(())
}

/// Wire repositories and services over an open database.
pub fn build_state(db: &Database, config: &AuthServiceConfig) -> AppState {
    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    let session_repo = Arc::new(SessionStore::new(db.get_connection()));

    let user_service = Arc::new(UserManager::new(user_repo.clone()));
    let auth_service = Arc::new(Authenticator::new(
        user_repo,
        session_repo,
        TokenIssuer::new(config.jwt_secret_bytes()),
        config.session_duration,
    ));

    let probes: Vec<Arc<dyn HealthProbe>> = vec![Arc::new(db.clone())];
    AppState::new(user_service, auth_service, probes)
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(
    config: AuthServiceConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let db = Database::connect::<Migrator>(&config.database).await?;
    let app = create_router(build_state(&db, &config));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Auth service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
