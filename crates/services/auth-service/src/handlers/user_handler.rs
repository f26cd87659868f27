//! User registration and login handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};

use crate::service::{CreateUserInput, CreatedUserOutput, LoginInput, LoginOutput};
use crate::state::AppState;
use common::{AppResult, ValidatedJson};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/users",
    tag = "Users",
    request_body = CreateUserInput,
    responses(
        (status = 201, description = "User created", body = CreatedUserOutput),
        (status = 400, description = "Invalid payload or user already exists", body = common::ErrorResponse),
        (status = 500, description = "Internal failure, empty body")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserInput>,
) -> AppResult<(StatusCode, Json<CreatedUserOutput>)> {
    let user = state
        .user_service
        .create_user(payload)
        .await
        .map_err(|e| e.with_context("error creating user"))?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Login and get a session token
#[utoipa::path(
    post,
    path = "/auth/users/login",
    tag = "Users",
    request_body = LoginInput,
    responses(
        (status = 201, description = "Session created", body = LoginOutput),
        (status = 400, description = "User not found", body = common::ErrorResponse),
        (status = 500, description = "Wrong password or internal failure, empty body")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginInput>,
) -> AppResult<(StatusCode, Json<LoginOutput>)> {
    let output = state.auth_service.login(payload).await?;

    Ok((StatusCode::CREATED, Json(output)))
}
