//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! All three services share these types.

pub mod constants;
pub mod cpf;
pub mod debt;
pub mod error;
pub mod password;
pub mod score;
pub mod session;
pub mod user;

pub use constants::*;
pub use debt::Debt;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use score::{calculate_score, Score};
pub use session::Session;
pub use user::{User, UserBuilder, UserRole};
