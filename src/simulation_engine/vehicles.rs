use crate::simulation_engine::intersections::{Density, Position};
use serde::{Deserialize, Serialize};

/// Display status of an emergency vehicle. Drift never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleActivity {
    Active,
    Responding,
}

/// An emergency vehicle moving across the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyVehicleNode {
    pub id: String,
    pub position: Position,
    pub activity: VehicleActivity,
    /// Congestion at the vehicle's location.
    pub density: Density,
}

impl EmergencyVehicleNode {
    pub fn new(id: &str, x: f64, y: f64, activity: VehicleActivity, density: Density) -> Self {
        Self {
            id: id.to_string(),
            position: Position::new(x, y),
            activity,
            density,
        }
    }
}

pub fn create_vehicles() -> Vec<EmergencyVehicleNode> {
    vec![
        EmergencyVehicleNode::new(
            "emergency-1",
            30.0,
            40.0,
            VehicleActivity::Active,
            Density::High,
        ),
        EmergencyVehicleNode::new(
            "emergency-2",
            80.0,
            25.0,
            VehicleActivity::Responding,
            Density::Medium,
        ),
    ]
}
