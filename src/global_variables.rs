// Tick cadences (milliseconds)
pub const NETWORK_TICK_MS: u64 = 4000;
pub const METRICS_TICK_MS: u64 = 3000;

// Operator signal timing (seconds)
pub const SIGNAL_TIMING_MIN_SECS: u32 = 15;
pub const SIGNAL_TIMING_MAX_SECS: u32 = 90;
pub const DEFAULT_SIGNAL_TIMING_SECS: u32 = 45;

// Map plane, percentage coordinates
pub const GRID_EXTENT: f64 = 100.0;
pub const VEHICLE_DRIFT_STEP: f64 = 1.0;

// Metric bounds
pub const WAIT_SECONDS_MIN: f64 = 20.0;
pub const WAIT_SECONDS_MAX: f64 = 90.0;
pub const WAIT_SECONDS_STEP: f64 = 5.0;
pub const EMERGENCY_COUNT_MIN: u32 = 0;
pub const EMERGENCY_COUNT_MAX: u32 = 8;
pub const EMERGENCY_INCREMENT_PROBABILITY: f64 = 0.3;

// Initial dashboard values
pub const INITIAL_ACTIVE_SIGNALS: u32 = 24;
pub const INITIAL_EMERGENCY_VEHICLES: u32 = 3;
pub const INITIAL_AVERAGE_WAIT_SECONDS: f64 = 45.0;
pub const INITIAL_SYSTEM_HEALTH_PERCENT: u8 = 98;

pub const METRICS_HISTORY_CAPACITY: usize = 120;
pub const SUMMARY_INTERVAL_SECS: u64 = 10;
