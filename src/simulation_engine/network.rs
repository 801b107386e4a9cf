use crate::error::ControlError;
use crate::shared_data::NetworkSnapshot;
use crate::simulation_engine::intersections::{create_signals, Position, SignalNode};
use crate::simulation_engine::movement::wrap_position;
use crate::simulation_engine::vehicles::{create_vehicles, EmergencyVehicleNode};
use std::collections::BTreeMap;

/// Authoritative state of every signal and emergency vehicle on the map.
///
/// Only the simulation core holds this mutably; everything else reads
/// [`NetworkSnapshot`] copies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetworkState {
    signals: BTreeMap<String, SignalNode>,
    vehicles: BTreeMap<String, EmergencyVehicleNode>,
}

impl NetworkState {
    /// Builds a network from the given nodes. A later duplicate id replaces an earlier one.
    pub fn new(signals: Vec<SignalNode>, vehicles: Vec<EmergencyVehicleNode>) -> Self {
        let signals = signals.into_iter().map(|s| (s.id.clone(), s)).collect();
        let vehicles = vehicles
            .into_iter()
            .map(|mut v| {
                v.position = Position::new(wrap_position(v.position.x), wrap_position(v.position.y));
                (v.id.clone(), v)
            })
            .collect();
        Self { signals, vehicles }
    }

    /// The fixed map layout every session starts with.
    pub fn seeded() -> Self {
        Self::new(create_signals(), create_vehicles())
    }

    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot {
            signals: self.signals.values().cloned().collect(),
            vehicles: self.vehicles.values().cloned().collect(),
        }
    }

    pub fn signal(&self, id: &str) -> Option<&SignalNode> {
        self.signals.get(id)
    }

    pub fn vehicle(&self, id: &str) -> Option<&EmergencyVehicleNode> {
        self.vehicles.get(id)
    }

    pub fn signal_ids(&self) -> Vec<String> {
        self.signals.keys().cloned().collect()
    }

    pub fn vehicle_ids(&self) -> Vec<String> {
        self.vehicles.keys().cloned().collect()
    }

    pub fn signal_count(&self) -> usize {
        self.signals.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// Advances one signal by a single step of the light cycle.
    pub fn apply_signal_transition(&mut self, id: &str) -> Result<(), ControlError> {
        let next = self
            .signals
            .get(id)
            .map(SignalNode::transitioned)
            .ok_or_else(|| ControlError::NotFound(id.to_string()))?;
        self.signals.insert(next.id.clone(), next);
        Ok(())
    }

    /// Moves one vehicle by `(dx, dy)`, wrapping each axis into the map plane.
    /// A NaN or infinite offset is refused and the vehicle stays put.
    pub fn apply_vehicle_drift(&mut self, id: &str, dx: f64, dy: f64) -> Result<(), ControlError> {
        let current = self
            .vehicles
            .get(id)
            .ok_or_else(|| ControlError::NotFound(id.to_string()))?;
        if !dx.is_finite() || !dy.is_finite() {
            return Err(ControlError::NonFiniteOffset { dx, dy });
        }
        let next = EmergencyVehicleNode {
            position: Position::new(
                wrap_position(current.position.x + dx),
                wrap_position(current.position.y + dy),
            ),
            ..current.clone()
        };
        self.vehicles.insert(next.id.clone(), next);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation_engine::intersections::LightState;

    #[test]
    fn seeded_layout_has_four_signals_and_two_vehicles() {
        let network = NetworkState::seeded();
        assert_eq!(network.signal_count(), 4);
        assert_eq!(network.vehicle_count(), 2);
        assert_eq!(
            network.signal("signal-2").map(|s| s.light_state),
            Some(LightState::Red)
        );
    }

    #[test]
    fn transition_touches_only_the_named_signal() {
        let mut network = NetworkState::seeded();
        let before = network.clone();

        network.apply_signal_transition("signal-1").unwrap();

        assert_eq!(
            network.signal("signal-1").map(|s| s.light_state),
            Some(LightState::Yellow)
        );
        for id in ["signal-2", "signal-3", "signal-4"] {
            assert_eq!(network.signal(id), before.signal(id));
        }
        assert_eq!(network.snapshot().vehicles, before.snapshot().vehicles);
    }

    #[test]
    fn unknown_ids_are_reported_and_change_nothing() {
        let mut network = NetworkState::seeded();
        let before = network.clone();

        assert_eq!(
            network.apply_signal_transition("does-not-exist"),
            Err(ControlError::NotFound("does-not-exist".to_string()))
        );
        assert!(network.apply_vehicle_drift("does-not-exist", 1.0, 1.0).is_err());
        // A signal id is not a vehicle id.
        assert!(network.apply_vehicle_drift("signal-1", 1.0, 1.0).is_err());

        assert_eq!(network, before);
    }

    #[test]
    fn drift_wraps_below_zero() {
        let mut network = NetworkState::new(
            Vec::new(),
            vec![EmergencyVehicleNode::new(
                "v1",
                0.3,
                99.8,
                crate::simulation_engine::vehicles::VehicleActivity::Active,
                crate::simulation_engine::intersections::Density::Low,
            )],
        );

        network.apply_vehicle_drift("v1", -0.5, 0.5).unwrap();

        let position = network.vehicle("v1").unwrap().position;
        assert!((position.x - 99.8).abs() < 1e-9);
        assert!((position.y - 0.3).abs() < 1e-9);
    }

    #[test]
    fn non_finite_drift_is_refused() {
        let mut network = NetworkState::seeded();
        let before = network.clone();

        assert!(matches!(
            network.apply_vehicle_drift("emergency-1", f64::NAN, f64::INFINITY),
            Err(ControlError::NonFiniteOffset { .. })
        ));
        assert_eq!(network, before);
    }

    #[test]
    fn non_finite_seed_positions_land_on_the_origin() {
        let network = NetworkState::new(
            Vec::new(),
            vec![EmergencyVehicleNode::new(
                "v1",
                f64::NAN,
                f64::NEG_INFINITY,
                crate::simulation_engine::vehicles::VehicleActivity::Responding,
                crate::simulation_engine::intersections::Density::Low,
            )],
        );
        let position = network.vehicle("v1").unwrap().position;
        assert_eq!((position.x, position.y), (0.0, 0.0));
    }

    #[test]
    fn snapshots_are_ordered_by_id_and_repeatable() {
        let network = NetworkState::seeded();
        let first = network.snapshot();
        let second = network.snapshot();
        assert_eq!(first, second);
        let ids: Vec<_> = first.signals.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["signal-1", "signal-2", "signal-3", "signal-4"]);
    }
}
