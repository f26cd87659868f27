//! Health check reporting shared by every service.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use futures::future::join_all;
use serde::{Deserialize, Serialize};

/// A dependency whose reachability is reported by `/health`.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    fn name(&self) -> &'static str;

    async fn check(&self) -> Result<(), String>;
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    pub status: String,
    pub services: BTreeMap<String, ServiceHealth>,
}

/// Service health with optional error message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ServiceHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Run every probe concurrently and collect the results.
pub async fn check_all(probes: &[Arc<dyn HealthProbe>]) -> HealthResponse {
    let results = join_all(probes.iter().map(|probe| async move {
        let health = match probe.check().await {
            Ok(()) => ServiceHealth {
                status: "healthy".to_string(),
                error: None,
            },
            Err(e) => {
                tracing::warn!(dependency = probe.name(), error = %e, "Health probe failed");
                ServiceHealth {
                    status: "unhealthy".to_string(),
                    error: Some(e),
                }
            }
        };
        (probe.name().to_string(), health)
    }))
    .await;

    let services: BTreeMap<String, ServiceHealth> = results.into_iter().collect();
    let all_healthy = services.values().all(|s| s.status == "healthy");

    HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        services,
    }
}

impl IntoResponse for HealthResponse {
    fn into_response(self) -> Response {
        if self.is_healthy() {
            (StatusCode::OK, Json(self)).into_response()
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, Json(self)).into_response()
        }
    }
}
