//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

pub const PARSE_ERROR_MESSAGE: &str = "error parsing request body";
pub const INVALID_PAYLOAD_MESSAGE: &str = "invalid parameters on request body";

/// Request payloads that check their own fields.
pub trait Validate {
    /// Every failed rule, in the order the rules are declared. Empty means valid.
    fn validate(&self) -> Vec<String>;
}

/// JSON extractor that rejects undecodable bodies and runs [`Validate`].
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(PARSE_ERROR_MESSAGE, vec![e.body_text()]))?;

        let errors = value.validate();
        if !errors.is_empty() {
            return Err(AppError::bad_request(INVALID_PAYLOAD_MESSAGE, errors));
        }

        Ok(ValidatedJson(value))
    }
}
