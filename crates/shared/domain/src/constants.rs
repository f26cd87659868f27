//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Role assigned to every user whose email is outside the company domain
pub const ROLE_DEFAULT: &str = "default";

/// Administrator role
pub const ROLE_ADMIN: &str = "admin";

/// Emails containing this suffix are promoted to administrators on creation
pub const ADMIN_EMAIL_DOMAIN: &str = "@br.furabolso.com";

// =============================================================================
// Validation
// =============================================================================

/// Minimum name length accepted by the user aggregate
pub const MIN_NAME_LENGTH: usize = 3;

/// Minimum email length accepted by the user aggregate
pub const MIN_EMAIL_LENGTH: usize = 3;

/// Number of digits in a CPF document
pub const CPF_LENGTH: usize = 11;

// =============================================================================
// Credentials
// =============================================================================

/// bcrypt cost factor used for every new hash
pub const PASSWORD_HASH_COST: u32 = 10;

/// bcrypt silently ignores input past this many bytes, so longer passwords are rejected
pub const MAX_PASSWORD_BYTES: usize = 72;

// =============================================================================
// Authentication
// =============================================================================

/// Default session lifetime in seconds
pub const DEFAULT_SESSION_DURATION_SECONDS: i64 = 3600;

/// Longest accepted session lifetime in seconds (30 days)
pub const MAX_SESSION_DURATION_SECONDS: i64 = 30 * 24 * 3600;

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Message returned with every issued token
pub const LOGIN_SUCCESS_MESSAGE: &str = "login successful";

// =============================================================================
// Score
// =============================================================================

/// Numerator of the score formula
pub const SCORE_NUMERATOR: f64 = 10_000.0;

/// Offset added to the mean debt before taking the square root
pub const SCORE_MEAN_OFFSET: f64 = 100.0;
