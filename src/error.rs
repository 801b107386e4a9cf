use thiserror::Error;

/// Failures surfaced by network mutators and operator controls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControlError {
    #[error("no signal or vehicle with id `{0}`")]
    NotFound(String),
    #[error("signal timing {value}s is outside [{min}, {max}] seconds")]
    InvalidRange { value: u32, min: u32, max: u32 },
    #[error("signal timing is locked while auto mode is on")]
    AutoModeActive,
    #[error("drift offset ({dx}, {dy}) is not finite")]
    NonFiniteOffset { dx: f64, dy: f64 },
}

/// Failures while loading or validating a session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("timers need a running tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
