//! Health check handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::state::AppState;

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies the debts service is reachable.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "All dependencies reachable", body = common::HealthResponse),
        (status = 503, description = "A dependency is down", body = common::HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Response {
    common::check_all(&state.probes).await.into_response()
}
