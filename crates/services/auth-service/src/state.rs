//! Application state for dependency injection.

use std::sync::Arc;

use common::HealthProbe;

use crate::service::{AuthService, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub auth_service: Arc<dyn AuthService>,
    /// Dependencies reported by `/health`
    pub probes: Vec<Arc<dyn HealthProbe>>,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        user_service: Arc<dyn UserService>,
        auth_service: Arc<dyn AuthService>,
        probes: Vec<Arc<dyn HealthProbe>>,
    ) -> Self {
        Self {
            user_service,
            auth_service,
            probes,
        }
    }
}
