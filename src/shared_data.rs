// src/shared_data.rs

use crate::control_system::traffic_light_controller::SignalControls;
use crate::flow_analyzer::metrics_aggregator::SystemMetrics;
use crate::monitoring::alerts::Alert;
use crate::simulation_engine::intersections::SignalNode;
use crate::simulation_engine::vehicles::EmergencyVehicleNode;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Read-only copy of every node on the map, ordered by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub signals: Vec<SignalNode>,
    pub vehicles: Vec<EmergencyVehicleNode>,
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub timestamp: u64,
    pub network: NetworkSnapshot,
    pub metrics: SystemMetrics,
    pub alerts: Vec<Alert>,
    pub selection: Option<String>,
    pub controls: SignalControls,
}

/// Seconds since the UNIX epoch; zero if the clock is before it.
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
