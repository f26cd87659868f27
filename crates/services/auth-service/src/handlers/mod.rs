//! HTTP handlers.

pub mod health_handler;
pub mod user_handler;
mod validators;

pub use health_handler::health_routes;
pub use user_handler::user_routes;
