//! Debt handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::service::{CreateDebtInput, CreateDebtOutput, DebtOutput};
use crate::state::AppState;
use common::{AppError, AppResult, ValidatedJson};
use domain::cpf;

/// Create debt routes
pub fn debt_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_debt))
        .route("/:user_document", get(get_debts))
}

/// Record a debt
#[utoipa::path(
    post,
    path = "/customer/debts",
    tag = "Debts",
    request_body = CreateDebtInput,
    responses(
        (status = 201, description = "Debt recorded", body = CreateDebtOutput),
        (status = 400, description = "Invalid payload", body = common::ErrorResponse),
        (status = 500, description = "Internal failure, empty body")
    )
)]
pub async fn create_debt(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDebtInput>,
) -> AppResult<(StatusCode, Json<CreateDebtOutput>)> {
    let debt = state
        .debt_service
        .create_debt(payload)
        .await
        .map_err(|e| e.with_context("error creating debt"))?;

    Ok((StatusCode::CREATED, Json(debt)))
}

/// List the debts of a customer
#[utoipa::path(
    get,
    path = "/customer/debts/{user_document}",
    tag = "Debts",
    params(("user_document" = String, Path, description = "Customer CPF, digits only")),
    responses(
        (status = 200, description = "Debts of the customer", body = [DebtOutput]),
        (status = 400, description = "Malformed document, empty body"),
        (status = 404, description = "No debts recorded, empty body"),
        (status = 500, description = "Internal failure, empty body")
    )
)]
pub async fn get_debts(
    State(state): State<AppState>,
    Path(user_document): Path<String>,
) -> AppResult<Json<Vec<DebtOutput>>> {
    if !cpf::validate(&user_document) {
        return Err(AppError::InvalidPathParameter);
    }

    let debts = state.debt_service.get_debts(&user_document).await?;
    if debts.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(debts))
}
