//! Service layer - business logic.

mod auth_service;
mod token;
mod user_service;

pub use auth_service::{AuthService, Authenticator, LoginInput, LoginOutput};
pub use token::{SessionClaims, TokenIssuer};
pub use user_service::{CreateUserInput, CreatedUserOutput, UserManager, UserService};
