//! Network state simulation core for an urban traffic-control dashboard.
//!
//! A [`Session`] owns the authoritative signal and emergency-vehicle state,
//! advances it on independent timers and hands read-only snapshots to
//! whatever renders the dashboard.

pub mod communication;
pub mod config;
pub mod control_system;
pub mod engine;
pub mod error;
pub mod flow_analyzer;
pub mod global_variables;
pub mod monitoring;
pub mod shared_data;
pub mod simulation_engine;

pub use config::SessionConfig;
pub use engine::session::Session;
pub use error::{ConfigError, ControlError};
pub use simulation_engine::simulation::{SimulationCore, TickKind};
