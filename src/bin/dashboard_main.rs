// dashboard_main.rs
use log::{error, info};
use network_dashboard::monitoring::operator_cli::run_cli;
use network_dashboard::{Session, SessionConfig};
use std::path::Path;
use std::sync::Arc;
use tokio::time::{interval, Duration, MissedTickBehavior};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match SessionConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => SessionConfig::default(),
    };

    let session = match Session::start(config.clone()) {
        Ok(session) => Arc::new(session),
        Err(e) => {
            eprintln!("Error starting session: {}", e);
            std::process::exit(1);
        }
    };

    // Periodic status line stands in for the dashboard renderer.
    let summary_session = Arc::clone(&session);
    let summary = tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(config.summary_interval_secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            let snapshot = summary_session.dashboard_snapshot();
            info!(
                "{} signals, {} vehicles | wait {:.0}s, {} emergency, health {}% | {}{}",
                snapshot.network.signals.len(),
                snapshot.network.vehicles.len(),
                snapshot.metrics.average_wait_seconds,
                snapshot.metrics.emergency_vehicle_count,
                snapshot.metrics.system_health_percent,
                if snapshot.controls.auto_mode { "AUTO" } else { "MANUAL" },
                if snapshot.controls.paused { " PAUSED" } else { "" },
            );
        }
    });

    let cli_session = Arc::clone(&session);
    if let Err(e) = tokio::task::spawn_blocking(move || run_cli(&cli_session)).await {
        error!("Operator CLI failed: {}", e);
    }

    summary.abort();
    let _ = summary.await;
    match Arc::try_unwrap(session) {
        Ok(mut session) => session.shutdown(),
        Err(_) => error!("Session still shared at exit; timers stop with the runtime"),
    }
}
