//! Score handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::service::ScoreOutput;
use crate::state::AppState;
use common::{AppError, AppResult};
use domain::cpf;

/// Create score routes
pub fn score_routes() -> Router<AppState> {
    Router::new().route("/:user_document", get(get_score))
}

/// Credit score of a customer
#[utoipa::path(
    get,
    path = "/customer/score/{user_document}",
    tag = "Score",
    params(("user_document" = String, Path, description = "Customer CPF, digits only")),
    responses(
        (status = 200, description = "Current score", body = ScoreOutput),
        (status = 400, description = "Malformed document, empty body"),
        (status = 500, description = "Debts service unavailable, empty body")
    )
)]
pub async fn get_score(
    State(state): State<AppState>,
    Path(user_document): Path<String>,
) -> AppResult<Json<ScoreOutput>> {
    if !cpf::validate(&user_document) {
        return Err(AppError::InvalidPathParameter);
    }

    let output = state.score_service.calculate_score(&user_document).await?;
    Ok(Json(output))
}
