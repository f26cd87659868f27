//! HTTP handlers.

pub mod debt_handler;
pub mod health_handler;
mod validators;

pub use debt_handler::debt_routes;
pub use health_handler::health_routes;
