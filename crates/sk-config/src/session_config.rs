use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SIMULATED_LATENCY_MS, MAX_SIMULATED_LATENCY_MS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Artificial round trip applied to login and signup
    pub simulated_latency_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.simulated_latency_ms > MAX_SIMULATED_LATENCY_MS {
            return Err(ConfigError::session(format!(
                "session.simulated_latency_ms must be 0-{}, got {}",
                MAX_SIMULATED_LATENCY_MS, self.simulated_latency_ms
            )));
        }

        Ok(())
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}
