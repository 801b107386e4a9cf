use crate::global_variables::{
    EMERGENCY_COUNT_MAX, EMERGENCY_COUNT_MIN, EMERGENCY_INCREMENT_PROBABILITY,
    INITIAL_ACTIVE_SIGNALS, INITIAL_AVERAGE_WAIT_SECONDS, INITIAL_EMERGENCY_VEHICLES,
    INITIAL_SYSTEM_HEALTH_PERCENT, METRICS_HISTORY_CAPACITY, WAIT_SECONDS_MAX, WAIT_SECONDS_MIN,
    WAIT_SECONDS_STEP,
};
use crate::shared_data::current_timestamp;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Network-wide KPIs shown on the overview cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub active_signal_count: u32,
    pub emergency_vehicle_count: u32,
    pub average_wait_seconds: f64,
    /// Display only; no engine drifts it.
    pub system_health_percent: u8,
}

impl Default for SystemMetrics {
    fn default() -> Self {
        Self {
            active_signal_count: INITIAL_ACTIVE_SIGNALS,
            emergency_vehicle_count: INITIAL_EMERGENCY_VEHICLES,
            average_wait_seconds: INITIAL_AVERAGE_WAIT_SECONDS,
            system_health_percent: INITIAL_SYSTEM_HEALTH_PERCENT,
        }
    }
}

/// One row of metric history, flat so it can be written straight to CSV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub timestamp: u64,
    pub active_signal_count: u32,
    pub emergency_vehicle_count: u32,
    pub average_wait_seconds: f64,
    pub system_health_percent: u8,
}

impl MetricSample {
    pub fn new(timestamp: u64, metrics: &SystemMetrics) -> Self {
        Self {
            timestamp,
            active_signal_count: metrics.active_signal_count,
            emergency_vehicle_count: metrics.emergency_vehicle_count,
            average_wait_seconds: metrics.average_wait_seconds,
            system_health_percent: metrics.system_health_percent,
        }
    }
}

/// Saturating update of the average wait time.
pub fn next_average_wait(current: f64, delta: f64) -> f64 {
    (current + delta).clamp(WAIT_SECONDS_MIN, WAIT_SECONDS_MAX)
}

/// Saturating unit step of the emergency vehicle count.
pub fn next_emergency_count(current: u32, increment: bool) -> u32 {
    let stepped = if increment {
        current.saturating_add(1)
    } else {
        current.saturating_sub(1)
    };
    stepped.clamp(EMERGENCY_COUNT_MIN, EMERGENCY_COUNT_MAX)
}

/// Drives the bounded random walk of [`SystemMetrics`] and keeps a short history of it.
#[derive(Debug, Clone)]
pub struct MetricsAggregator {
    metrics: SystemMetrics,
    history: VecDeque<MetricSample>,
    capacity: usize,
}

impl Default for MetricsAggregator {
    fn default() -> Self {
        Self::new(SystemMetrics::default())
    }
}

impl MetricsAggregator {
    pub fn new(initial: SystemMetrics) -> Self {
        Self::with_capacity(initial, METRICS_HISTORY_CAPACITY)
    }

    pub fn with_capacity(initial: SystemMetrics, capacity: usize) -> Self {
        let mut aggregator = Self {
            metrics: initial,
            history: VecDeque::with_capacity(capacity),
            capacity,
        };
        aggregator.record(current_timestamp());
        aggregator
    }

    pub fn metrics(&self) -> SystemMetrics {
        self.metrics
    }

    pub fn history(&self) -> Vec<MetricSample> {
        self.history.iter().copied().collect()
    }

    /// Runs one metrics tick and returns the new values.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SystemMetrics {
        let wait_delta = rng.random_range(-WAIT_SECONDS_STEP..=WAIT_SECONDS_STEP);
        let increment = rng.random_bool(EMERGENCY_INCREMENT_PROBABILITY);
        self.metrics = SystemMetrics {
            average_wait_seconds: next_average_wait(self.metrics.average_wait_seconds, wait_delta),
            emergency_vehicle_count: next_emergency_count(
                self.metrics.emergency_vehicle_count,
                increment,
            ),
            ..self.metrics
        };
        debug!(
            "Metrics tick: wait {:.1}s, {} emergency vehicles",
            self.metrics.average_wait_seconds, self.metrics.emergency_vehicle_count
        );
        self.record(current_timestamp());
        self.metrics
    }

    fn record(&mut self, timestamp: u64) {
        if self.capacity == 0 {
            return;
        }
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history
            .push_back(MetricSample::new(timestamp, &self.metrics));
    }
}
