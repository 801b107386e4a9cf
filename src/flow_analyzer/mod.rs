// flow_analyzer/mod.rs
pub mod metrics_aggregator;
