use crate::global_variables::{GRID_EXTENT, VEHICLE_DRIFT_STEP};
use crate::simulation_engine::network::NetworkState;
use log::warn;
use rand::Rng;

/// Wraps a map coordinate back into `[0, GRID_EXTENT)`.
///
/// Negative inputs re-enter from the far edge, so `-0.4` becomes `99.6`.
/// This is wraparound, not clamping. NaN and infinities have no place on the
/// map and map to the origin.
pub fn wrap_position(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(GRID_EXTENT);
    // rem_euclid rounds tiny negative inputs up to the extent itself
    if wrapped >= GRID_EXTENT {
        0.0
    } else {
        wrapped
    }
}

/// Bounded random walk for emergency vehicle positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleDriftEngine {
    /// Each axis moves by a uniform draw from `[-max_step, max_step]`.
    pub max_step: f64,
}

impl Default for VehicleDriftEngine {
    fn default() -> Self {
        Self::new(VEHICLE_DRIFT_STEP)
    }
}

impl VehicleDriftEngine {
    pub fn new(max_step: f64) -> Self {
        Self {
            max_step: max_step.abs(),
        }
    }

    /// Draws an independent `(dx, dy)` offset.
    pub fn sample_delta<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        let step = self.max_step;
        (
            rng.random_range(-step..=step),
            rng.random_range(-step..=step),
        )
    }

    /// Moves every vehicle in `network` by one drift step. Returns how many moved.
    pub fn drift_all<R: Rng + ?Sized>(&self, network: &mut NetworkState, rng: &mut R) -> usize {
        let mut moved = 0;
        for id in network.vehicle_ids() {
            let (dx, dy) = self.sample_delta(rng);
            match network.apply_vehicle_drift(&id, dx, dy) {
                Ok(()) => moved += 1,
                Err(e) => warn!("Skipping drift for vehicle {}: {}", id, e),
            }
        }
        moved
    }
}
