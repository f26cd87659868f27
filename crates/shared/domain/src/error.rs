//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).
//! Display strings are part of the public API: handlers send them verbatim.

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid cpf")]
    InvalidDocument,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid email")]
    InvalidEmail,

    /// Empty plaintext password
    #[error("invalid password")]
    InvalidPassword,

    /// Empty stored hash
    #[error("invalid hashed password")]
    InvalidHashedPassword,

    /// Stored hash is present but not a well-formed bcrypt digest
    #[error("malformed hashed password: {0}")]
    MalformedHash(String),

    #[error("bcrypt: password length exceeds 72 bytes")]
    PasswordTooLong,

    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("user already exists")]
    UserAlreadyExists,

    #[error("user not found")]
    UserNotFound,

    /// Stored role name is neither of the known roles
    #[error("unknown user type: {0}")]
    UnknownRole(String),

    /// Session expiry does not fit in a timestamp
    #[error("session expiry out of range")]
    SessionOutOfRange,

    /// Hashing backend failure
    #[error("password hashing failed: {0}")]
    Hashing(String),
}

impl DomainError {
    /// Create a malformed hash error
    pub fn malformed_hash(reason: impl Into<String>) -> Self {
        DomainError::MalformedHash(reason.into())
    }

    /// Create a hashing error
    pub fn hashing(reason: impl Into<String>) -> Self {
        DomainError::Hashing(reason.into())
    }

    /// Whether the error comes from the service itself rather than user input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            DomainError::Hashing(_) | DomainError::UnknownRole(_) | DomainError::SessionOutOfRange
        )
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
