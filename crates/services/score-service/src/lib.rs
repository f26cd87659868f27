//! Score Service Library
//!
//! Computes a customer's credit score from the debts recorded in the debts
//! service. Nothing is persisted here.

pub mod client;
pub mod config;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::client::HttpDebtsClient;
use crate::config::ScoreServiceConfig;
use crate::service::ScoreCalculator;
use crate::state::AppState;
use common::{AppResult, HealthProbe};

pub use routes::create_router;

/// Run the score service as an embedded component (for combined binary).
pub async fn run_embedded(
    host: Option<&str>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = ScoreServiceConfig::from_env()?;
    if let Some(host) = host {
        config.server.host = host.to_string();
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    run_server_with_config(config).await
}

/// Wire the debts client and score service.
pub fn build_state(config: &ScoreServiceConfig) -> AppResult<AppState> {
    let debts_client = Arc::new(HttpDebtsClient::new(
        config.debts_service_url.clone(),
        config.debts_service_timeout,
    )?);
    let score_service = Arc::new(ScoreCalculator::new(debts_client.clone()));

    let probes: Vec<Arc<dyn HealthProbe>> = vec![debts_client];
    Ok(AppState::new(score_service, probes))
}

async fn run_server_with_config(
    config: ScoreServiceConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = create_router(build_state(&config)?);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        debts_service = %config.debts_service_url,
        "Score service listening on {}", addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
