//! Score service configuration.

use std::time::Duration;

use common::{ConfigError, ConfigSource, EnvSource, ServerConfig, Settings};

const ENV_PREFIX: &str = "SCORE_SERVICE";
const DEFAULT_PORT: u16 = 8082;
const DEFAULT_DEBTS_SERVICE_URL: &str = "http://localhost:8081";

/// Score service configuration.
#[derive(Debug, Clone)]
pub struct ScoreServiceConfig {
    pub server: ServerConfig,
    /// Base URL of the debts service, without a trailing slash
    pub debts_service_url: String,
    /// Deadline for a single call to the debts service; none when unset
    pub debts_service_timeout: Option<Duration>,
}

impl ScoreServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&EnvSource)
    }

    pub fn from_source(source: &dyn ConfigSource) -> Result<Self, ConfigError> {
        let settings = Settings::new(source, ENV_PREFIX);

        let debts_service_url = settings
            .or("DEBTS_SERVICE_URL", DEFAULT_DEBTS_SERVICE_URL.to_string())?
            .trim_end_matches('/')
            .to_string();

        let debts_service_timeout = match settings.optional::<u64>("DEBTS_SERVICE_TIMEOUT_MS")? {
            Some(0) => {
                return Err(ConfigError::Invalid {
                    key: "DEBTS_SERVICE_TIMEOUT_MS".to_string(),
                    reason: "must be greater than zero".to_string(),
                })
            }
            Some(ms) => Some(Duration::from_millis(ms)),
            None => None,
        };

        Ok(Self {
            server: ServerConfig::load(&settings, DEFAULT_PORT)?,
            debts_service_url,
            debts_service_timeout,
        })
    }
}
