use crate::error::ControlError;
use crate::global_variables::{
    DEFAULT_SIGNAL_TIMING_SECS, NETWORK_TICK_MS, SIGNAL_TIMING_MAX_SECS, SIGNAL_TIMING_MIN_SECS,
};
use crate::simulation_engine::network::NetworkState;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Operator-facing switches that gate and pace the signal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalControls {
    /// `true`: cadence is the engine's fixed interval. `false`: cadence is `signal_timing_secs`.
    pub auto_mode: bool,
    pub paused: bool,
    pub signal_timing_secs: u32,
}

impl Default for SignalControls {
    fn default() -> Self {
        Self {
            auto_mode: true,
            paused: false,
            signal_timing_secs: DEFAULT_SIGNAL_TIMING_SECS,
        }
    }
}

/// Checks an operator timing value against the allowed slider range.
pub fn validate_signal_timing(seconds: u32) -> Result<u32, ControlError> {
    if (SIGNAL_TIMING_MIN_SECS..=SIGNAL_TIMING_MAX_SECS).contains(&seconds) {
        Ok(seconds)
    } else {
        Err(ControlError::InvalidRange {
            value: seconds,
            min: SIGNAL_TIMING_MIN_SECS,
            max: SIGNAL_TIMING_MAX_SECS,
        })
    }
}

/// Steps every signal through green, yellow, red on each network tick.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalCycleEngine {
    auto_interval: Duration,
    controls: SignalControls,
}

impl Default for SignalCycleEngine {
    fn default() -> Self {
        Self::new(Duration::from_millis(NETWORK_TICK_MS))
    }
}

impl SignalCycleEngine {
    pub fn new(auto_interval: Duration) -> Self {
        Self {
            auto_interval,
            controls: SignalControls::default(),
        }
    }

    pub fn with_controls(auto_interval: Duration, controls: SignalControls) -> Self {
        Self {
            auto_interval,
            controls,
        }
    }

    pub fn controls(&self) -> SignalControls {
        self.controls
    }

    pub fn is_paused(&self) -> bool {
        self.controls.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.controls.paused != paused {
            info!(
                "Signal network {}",
                if paused { "paused" } else { "resumed" }
            );
        }
        self.controls.paused = paused;
    }

    pub fn set_auto_mode(&mut self, auto_mode: bool) {
        if self.controls.auto_mode != auto_mode {
            info!(
                "Signal timing switched to {} mode",
                if auto_mode { "auto" } else { "manual" }
            );
        }
        self.controls.auto_mode = auto_mode;
    }

    /// Stores an operator timing value. Refused while auto mode is on; the
    /// stored value is then left as it was.
    pub fn set_signal_timing_seconds(&mut self, seconds: u32) -> Result<(), ControlError> {
        if self.controls.auto_mode {
            warn!(
                "Ignoring signal timing {}s while auto mode is on (kept {}s)",
                seconds, self.controls.signal_timing_secs
            );
            return Err(ControlError::AutoModeActive);
        }
        match validate_signal_timing(seconds) {
            Ok(seconds) => {
                info!(
                    "Signal timing adjusted from {}s to {}s",
                    self.controls.signal_timing_secs, seconds
                );
                self.controls.signal_timing_secs = seconds;
                Ok(())
            }
            Err(e) => {
                warn!("Rejected signal timing update: {}", e);
                Err(e)
            }
        }
    }

    /// Time between two signal transitions under the current controls.
    pub fn cadence(&self) -> Duration {
        if self.controls.auto_mode {
            self.auto_interval
        } else {
            Duration::from_secs(u64::from(self.controls.signal_timing_secs))
        }
    }

    /// Moves every signal in `network` one step along the cycle. Returns how many changed.
    pub fn advance_all(&self, network: &mut NetworkState) -> usize {
        let mut advanced = 0;
        for id in network.signal_ids() {
            match network.apply_signal_transition(&id) {
                Ok(()) => advanced += 1,
                Err(e) => warn!("Skipping transition for signal {}: {}", id, e),
            }
        }
        advanced
    }
}
