use crate::control_system::traffic_light_controller::validate_signal_timing;
use crate::error::ConfigError;
use crate::global_variables::{
    DEFAULT_SIGNAL_TIMING_SECS, METRICS_TICK_MS, NETWORK_TICK_MS, SUMMARY_INTERVAL_SECS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Settings for one dashboard session. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Signal/vehicle cadence in auto mode.
    pub network_tick_ms: u64,
    pub metrics_tick_ms: u64,
    pub auto_mode: bool,
    pub signal_timing_secs: u32,
    /// Fixed seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// How often the operator binary prints a status line.
    pub summary_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            network_tick_ms: NETWORK_TICK_MS,
            metrics_tick_ms: METRICS_TICK_MS,
            auto_mode: true,
            signal_timing_secs: DEFAULT_SIGNAL_TIMING_SECS,
            seed: None,
            summary_interval_secs: SUMMARY_INTERVAL_SECS,
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.network_tick_ms == 0 {
            return Err(ConfigError::Invalid("network_tick_ms must be positive".into()));
        }
        if self.metrics_tick_ms == 0 {
            return Err(ConfigError::Invalid("metrics_tick_ms must be positive".into()));
        }
        if self.summary_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "summary_interval_secs must be positive".into(),
            ));
        }
        validate_signal_timing(self.signal_timing_secs)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }

    pub fn network_interval(&self) -> Duration {
        Duration::from_millis(self.network_tick_ms)
    }

    pub fn metrics_interval(&self) -> Duration {
        Duration::from_millis(self.metrics_tick_ms)
    }
}
