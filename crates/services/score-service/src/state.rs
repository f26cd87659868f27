//! Application state for dependency injection.

use std::sync::Arc;

use common::HealthProbe;

use crate::service::ScoreService;

#[derive(Clone)]
pub struct AppState {
    pub score_service: Arc<dyn ScoreService>,
    pub probes: Vec<Arc<dyn HealthProbe>>,
}

impl AppState {
    pub fn new(score_service: Arc<dyn ScoreService>, probes: Vec<Arc<dyn HealthProbe>>) -> Self {
        Self {
            score_service,
            probes,
        }
    }
}
