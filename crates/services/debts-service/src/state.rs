//! Application state for dependency injection.

use std::sync::Arc;

use common::HealthProbe;

use crate::service::DebtService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub debt_service: Arc<dyn DebtService>,
    pub probes: Vec<Arc<dyn HealthProbe>>,
}

impl AppState {
    pub fn new(debt_service: Arc<dyn DebtService>, probes: Vec<Arc<dyn HealthProbe>>) -> Self {
        Self {
            debt_service,
            probes,
        }
    }
}
