//! Common utilities shared across all microservices.
//!
//! This crate provides:
//! - Unified error handling and its HTTP mapping
//! - Configuration structures and environment lookup
//! - The validated JSON extractor
//! - Health check reporting
//! - Database pool and migration helpers (feature `database`)

pub mod config;
#[cfg(feature = "database")]
pub mod db;
pub mod error;
pub mod extractors;
pub mod health;

pub use config::*;
pub use error::{AppError, AppResult, ErrorResponse, OptionExt};
pub use extractors::{Validate, ValidatedJson};
pub use health::{check_all, HealthProbe, HealthResponse, ServiceHealth};

#[cfg(feature = "database")]
pub use db::{run_migrate_action, Database, MigrateAction};
