use crate::config::SessionConfig;
use crate::control_system::traffic_light_controller::SignalControls;
use crate::engine::scheduler::{lock_core, Scheduler, SharedCore};
use crate::error::{ConfigError, ControlError};
use crate::flow_analyzer::metrics_aggregator::{MetricSample, SystemMetrics};
use crate::monitoring::alerts::Alert;
use crate::monitoring::dispatch::DispatchedUnit;
use crate::shared_data::{DashboardSnapshot, NetworkSnapshot};
use crate::simulation_engine::simulation::{SimulationCore, TickKind};
use log::info;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A live dashboard session: the simulation core plus, when started, the
/// timers that drive it.
///
/// All reads go through the core lock and return owned copies.
pub struct Session {
    core: SharedCore,
    scheduler: Option<Scheduler>,
}

impl Session {
    /// Builds the core and starts its timers on the current tokio runtime.
    ///
    /// Fails with [`ConfigError::NoRuntime`] when called outside a runtime.
    pub fn start(config: SessionConfig) -> Result<Self, ConfigError> {
        let mut session = Self::stepped(config)?;
        session.scheduler = Some(Scheduler::start(Arc::clone(&session.core))?);
        info!("Session started");
        Ok(session)
    }

    /// Builds the core without timers; ticks only happen through [`Session::step`].
    pub fn stepped(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_core(SimulationCore::new(&config)))
    }

    pub fn from_core(core: SimulationCore) -> Self {
        Self {
            core: Arc::new(Mutex::new(core)),
            scheduler: None,
        }
    }

    pub fn step(&self, kind: TickKind) -> bool {
        lock_core(&self.core).tick(kind)
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.as_ref().is_some_and(Scheduler::is_running)
    }

    /// Cancels all timers. No tick fires afterwards.
    pub fn shutdown(&mut self) {
        if let Some(mut scheduler) = self.scheduler.take() {
            scheduler.shutdown();
            info!("Session stopped");
        }
    }

    pub fn tick_counts(&self) -> (u64, u64) {
        let core = lock_core(&self.core);
        (core.network_ticks(), core.metrics_ticks())
    }

    pub fn network_snapshot(&self) -> NetworkSnapshot {
        lock_core(&self.core).network_snapshot()
    }

    pub fn metrics_snapshot(&self) -> SystemMetrics {
        lock_core(&self.core).metrics_snapshot()
    }

    pub fn metrics_history(&self) -> Vec<MetricSample> {
        lock_core(&self.core).metrics_history()
    }

    pub fn list_alerts(&self) -> Vec<Alert> {
        lock_core(&self.core).list_alerts()
    }

    pub fn dispatch_roster(&self) -> Vec<DispatchedUnit> {
        lock_core(&self.core).dispatch_roster()
    }

    pub fn dashboard_snapshot(&self) -> DashboardSnapshot {
        lock_core(&self.core).dashboard_snapshot()
    }

    pub fn select(&self, id: Option<&str>) -> Option<String> {
        lock_core(&self.core).select(id)
    }

    pub fn current_selection(&self) -> Option<String> {
        lock_core(&self.core).current_selection()
    }

    /// Period the scheduler will wait before the next pass of `kind`.
    pub fn cadence(&self, kind: TickKind) -> Duration {
        lock_core(&self.core).cadence(kind)
    }

    pub fn controls(&self) -> SignalControls {
        lock_core(&self.core).controls()
    }

    pub fn set_paused(&self, paused: bool) {
        lock_core(&self.core).set_paused(paused);
    }

    pub fn set_auto_mode(&self, auto_mode: bool) {
        lock_core(&self.core).set_auto_mode(auto_mode);
    }

    pub fn set_signal_timing_seconds(&self, seconds: u32) -> Result<(), ControlError> {
        lock_core(&self.core).set_signal_timing_seconds(seconds)
    }

    pub fn reset_network(&self) {
        lock_core(&self.core).reset_network();
    }

    pub fn apply_signal_transition(&self, id: &str) -> Result<(), ControlError> {
        lock_core(&self.core).apply_signal_transition(id)
    }

    pub fn apply_vehicle_drift(&self, id: &str, dx: f64, dy: f64) -> Result<(), ControlError> {
        lock_core(&self.core).apply_vehicle_drift(id, dx, dy)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}
