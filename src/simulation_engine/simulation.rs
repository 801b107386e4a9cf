// simulation.rs
use crate::config::SessionConfig;
use crate::control_system::traffic_light_controller::{SignalControls, SignalCycleEngine};
use crate::error::ControlError;
use crate::flow_analyzer::metrics_aggregator::{MetricSample, MetricsAggregator, SystemMetrics};
use crate::monitoring::alerts::{Alert, AlertFeed};
use crate::monitoring::dispatch::{create_dispatch_roster, DispatchedUnit};
use crate::monitoring::selection::SelectionController;
use crate::shared_data::{current_timestamp, DashboardSnapshot, NetworkSnapshot};
use crate::simulation_engine::movement::VehicleDriftEngine;
use crate::simulation_engine::network::NetworkState;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::time::Duration;

/// The independent periodic passes of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickKind {
    /// Signal cycling and vehicle drift, fired together. Gated by pause.
    Network,
    /// KPI drift. Never paused.
    Metrics,
}

/// All state of one dashboard session plus the engines that advance it.
///
/// Every tick builds the next value of the state it owns and then swaps it in,
/// so a reader that can see the core always sees a completed tick.
pub struct SimulationCore {
    network: NetworkState,
    signal_engine: SignalCycleEngine,
    drift_engine: VehicleDriftEngine,
    metrics: MetricsAggregator,
    alerts: AlertFeed,
    selection: SelectionController,
    dispatch: Vec<DispatchedUnit>,
    metrics_interval: Duration,
    rng: Box<dyn RngCore + Send>,
    network_ticks: u64,
    metrics_ticks: u64,
}

impl SimulationCore {
    /// Seeds the random source from `config.seed`, or from the OS when unset.
    pub fn new(config: &SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, Box::new(rng))
    }

    pub fn with_rng(config: &SessionConfig, rng: Box<dyn RngCore + Send>) -> Self {
        let controls = SignalControls {
            auto_mode: config.auto_mode,
            paused: false,
            signal_timing_secs: config.signal_timing_secs,
        };
        Self {
            network: NetworkState::seeded(),
            signal_engine: SignalCycleEngine::with_controls(config.network_interval(), controls),
            drift_engine: VehicleDriftEngine::default(),
            metrics: MetricsAggregator::new(SystemMetrics::default()),
            alerts: AlertFeed::seeded(current_timestamp()),
            selection: SelectionController::new(),
            dispatch: create_dispatch_roster(),
            metrics_interval: config.metrics_interval(),
            rng,
            network_ticks: 0,
            metrics_ticks: 0,
        }
    }

    /// Replaces the map layout, e.g. with a custom network for an embedding host.
    pub fn with_network(mut self, network: NetworkState) -> Self {
        self.network = network;
        self
    }

    /// Runs one complete pass of `kind`. Returns `false` if the pass was skipped.
    pub fn tick(&mut self, kind: TickKind) -> bool {
        match kind {
            TickKind::Network => self.network_tick(),
            TickKind::Metrics => self.metrics_tick(),
        }
    }

    fn network_tick(&mut self) -> bool {
        if self.signal_engine.is_paused() {
            debug!("Network tick skipped while paused");
            return false;
        }
        let mut next = self.network.clone();
        let advanced = self.signal_engine.advance_all(&mut next);
        let moved = self.drift_engine.drift_all(&mut next, &mut *self.rng);
        self.network = next;
        self.network_ticks += 1;
        debug!(
            "Network tick {}: {} signals advanced, {} vehicles moved",
            self.network_ticks, advanced, moved
        );
        true
    }

    fn metrics_tick(&mut self) -> bool {
        self.metrics.tick(&mut *self.rng);
        self.metrics_ticks += 1;
        true
    }

    /// Time until the next pass of `kind` under the current controls.
    pub fn cadence(&self, kind: TickKind) -> Duration {
        match kind {
            TickKind::Network => self.signal_engine.cadence(),
            TickKind::Metrics => self.metrics_interval,
        }
    }

    pub fn network_ticks(&self) -> u64 {
        self.network_ticks
    }

    pub fn metrics_ticks(&self) -> u64 {
        self.metrics_ticks
    }

    pub fn network(&self) -> &NetworkState {
        &self.network
    }

    pub fn network_snapshot(&self) -> NetworkSnapshot {
        self.network.snapshot()
    }

    pub fn metrics_snapshot(&self) -> SystemMetrics {
        self.metrics.metrics()
    }

    pub fn metrics_history(&self) -> Vec<MetricSample> {
        self.metrics.history()
    }

    pub fn list_alerts(&self) -> Vec<Alert> {
        self.alerts.list_alerts()
    }

    pub fn dispatch_roster(&self) -> Vec<DispatchedUnit> {
        self.dispatch.clone()
    }

    pub fn select(&mut self, id: Option<&str>) -> Option<String> {
        self.selection.select(id)
    }

    pub fn current_selection(&self) -> Option<String> {
        self.selection.current_selection()
    }

    pub fn controls(&self) -> SignalControls {
        self.signal_engine.controls()
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.signal_engine.set_paused(paused);
    }

    pub fn set_auto_mode(&mut self, auto_mode: bool) {
        self.signal_engine.set_auto_mode(auto_mode);
    }

    pub fn set_signal_timing_seconds(&mut self, seconds: u32) -> Result<(), ControlError> {
        self.signal_engine.set_signal_timing_seconds(seconds)
    }

    /// Puts every signal and vehicle back to the seeded layout.
    pub fn reset_network(&mut self) {
        self.network = NetworkState::seeded();
        info!("Network reset to seeded layout");
    }

    pub fn apply_signal_transition(&mut self, id: &str) -> Result<(), ControlError> {
        self.network.apply_signal_transition(id)
    }

    pub fn apply_vehicle_drift(&mut self, id: &str, dx: f64, dy: f64) -> Result<(), ControlError> {
        self.network.apply_vehicle_drift(id, dx, dy)
    }

    pub fn dashboard_snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            timestamp: current_timestamp(),
            network: self.network_snapshot(),
            metrics: self.metrics_snapshot(),
            alerts: self.list_alerts(),
            selection: self.current_selection(),
            controls: self.controls(),
        }
    }
}
