//! Unified error handling for the HTTP services.
//!
//! Client errors carry a JSON body `{message, errors}`. Infrastructure
//! failures are logged here and answered with a bare 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Client errors
    #[error("{message}")]
    BadRequest {
        message: String,
        errors: Vec<String>,
    },

    /// Malformed path parameter; answered without a body
    #[error("invalid path parameter")]
    InvalidPathParameter,

    #[error("resource not found")]
    NotFound,

    /// Password mismatch or unusable stored hash; answered as a bare 500
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Domain(#[from] DomainError),

    // External service errors
    #[cfg(feature = "database")]
    #[error("database error")]
    Database(#[from] sea_orm::DbErr),

    #[cfg(feature = "jwt")]
    #[error("token signing error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[cfg(feature = "http-client")]
    #[error("upstream request failed")]
    Upstream(#[from] reqwest::Error),

    // Internal
    #[error("internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest { .. } => "BAD_REQUEST",
            AppError::InvalidPathParameter => "INVALID_PATH_PARAMETER",
            AppError::NotFound => "NOT_FOUND",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Domain(e) if e.is_internal() => "INTERNAL_ERROR",
            AppError::Domain(_) => "DOMAIN_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => "TOKEN_ERROR",
            #[cfg(feature = "http-client")]
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } | AppError::InvalidPathParameter => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Domain(e) if e.is_internal() => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Domain(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Response body, or `None` for errors answered with status only.
    ///
    /// Logs the cause of every server-side failure.
    pub fn body(&self) -> Option<ErrorResponse> {
        match self {
            AppError::BadRequest { message, errors } => Some(ErrorResponse {
                message: message.clone(),
                errors: errors.clone(),
            }),
            AppError::Domain(e) if !e.is_internal() => Some(ErrorResponse {
                message: e.to_string(),
                errors: Vec::new(),
            }),
            AppError::InvalidPathParameter | AppError::NotFound => None,

            // Hide details for internal errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!(error = ?e, "Database error");
                None
            }
            #[cfg(feature = "jwt")]
            AppError::Jwt(e) => {
                tracing::error!(error = ?e, "JWT error");
                None
            }
            #[cfg(feature = "http-client")]
            AppError::Upstream(e) => {
                tracing::error!(error = ?e, "Upstream request error");
                None
            }
            AppError::InvalidCredentials => {
                tracing::warn!("Login rejected: invalid credentials");
                None
            }
            AppError::Domain(e) => {
                tracing::error!(error = %e, "Domain infrastructure error");
                None
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                None
            }
        }
    }

    /// Wrap a client-facing domain error under a context message, e.g.
    /// `{"message": "error creating user", "errors": ["user already exists"]}`.
    ///
    /// Other errors pass through unchanged.
    pub fn with_context(self, message: impl Into<String>) -> Self {
        match self {
            AppError::Domain(e) if !e.is_internal() => AppError::BadRequest {
                message: message.into(),
                errors: vec![e.to_string()],
            },
            other => other,
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.body() {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn bad_request(message: impl Into<String>, errors: Vec<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
            errors,
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, Vec<u8>) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_bad_request_body() {
        let err = AppError::bad_request("invalid parameters on request body", vec!["invalid cpf".into()]);
        let (status, bytes) = body_of(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"message": "invalid parameters on request body", "errors": ["invalid cpf"]})
        );
    }

    #[tokio::test]
    async fn test_internal_error_has_empty_body() {
        let (status, bytes) = body_of(AppError::internal("boom")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_not_found_has_empty_body() {
        let (status, bytes) = body_of(AppError::NotFound).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_user_not_found_is_bad_request() {
        let (status, bytes) = body_of(DomainError::UserNotFound.into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"message": "user not found"}));
    }

    #[tokio::test]
    async fn test_invalid_credentials_is_generic_failure() {
        let (status, bytes) = body_of(AppError::InvalidCredentials).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_hashing_failure_is_internal() {
        let (status, bytes) = body_of(DomainError::hashing("rng").into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_with_context() {
        let err = AppError::from(DomainError::UserAlreadyExists).with_context("error creating user");

        match err {
            AppError::BadRequest { message, errors } => {
                assert_eq!(message, "error creating user");
                assert_eq!(errors, vec!["user already exists".to_string()]);
            }
            other => panic!("unexpected {other:?}"),
        }

        assert!(matches!(
            AppError::NotFound.with_context("ignored"),
            AppError::NotFound
        ));
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<u8> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
    }
}
