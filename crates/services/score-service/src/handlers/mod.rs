//! HTTP handlers.

pub mod health_handler;
pub mod score_handler;

pub use health_handler::health_routes;
pub use score_handler::score_routes;
