//! Service layer - business logic.

mod score_service;

pub use score_service::{ScoreCalculator, ScoreOutput, ScoreService};
