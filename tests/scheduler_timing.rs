//! Timer behaviour of a live session, run against tokio's paused clock.

use network_dashboard::{Session, SessionConfig};
use tokio::time::{sleep, Duration};

fn config() -> SessionConfig {
    SessionConfig {
        seed: Some(99),
        ..SessionConfig::default()
    }
}

/// Network ticks every 4 s and metrics every 3 s by default.
#[tokio::test(start_paused = true)]
async fn ticks_fire_on_default_cadences() {
    let session = Session::start(config()).unwrap();
    assert!(session.is_running());

    sleep(Duration::from_millis(4500)).await;
    assert_eq!(session.tick_counts(), (1, 1));

    sleep(Duration::from_millis(2000)).await;
    assert_eq!(session.tick_counts(), (1, 2));

    sleep(Duration::from_millis(2000)).await;
    assert_eq!(session.tick_counts(), (2, 2));
}

/// After shutdown no timer mutates the session again.
#[tokio::test(start_paused = true)]
async fn shutdown_cancels_every_timer() {
    let mut session = Session::start(config()).unwrap();
    sleep(Duration::from_millis(4500)).await;

    session.shutdown();
    let counts = session.tick_counts();
    let network = session.network_snapshot();
    let metrics = session.metrics_snapshot();

    sleep(Duration::from_secs(60)).await;

    assert!(!session.is_running());
    assert_eq!(session.tick_counts(), counts);
    assert_eq!(session.network_snapshot(), network);
    assert_eq!(session.metrics_snapshot(), metrics);
}

/// Pausing stops signals and vehicles but the metrics keep updating.
#[tokio::test(start_paused = true)]
async fn pause_suspends_network_but_not_metrics() {
    let session = Session::start(config()).unwrap();
    session.set_paused(true);
    let network = session.network_snapshot();

    sleep(Duration::from_millis(10_000)).await;

    assert_eq!(session.tick_counts(), (0, 3));
    assert_eq!(session.network_snapshot(), network);

    session.set_paused(false);
    sleep(Duration::from_millis(4000)).await;
    assert!(session.tick_counts().0 >= 1);
    assert_ne!(session.network_snapshot(), network);
}

/// Manual mode paces the signal cycle with the operator timing.
#[tokio::test(start_paused = true)]
async fn manual_mode_uses_operator_timing_from_the_start() {
    let session = Session::start(SessionConfig {
        auto_mode: false,
        signal_timing_secs: 50,
        ..config()
    })
    .unwrap();

    sleep(Duration::from_secs(49)).await;
    assert_eq!(session.tick_counts().0, 0);

    sleep(Duration::from_secs(2)).await;
    assert_eq!(session.tick_counts().0, 1);
}

/// A timing change takes effect from the next network period.
#[tokio::test(start_paused = true)]
async fn switching_to_manual_applies_after_the_current_period() {
    let session = Session::start(config()).unwrap();
    // Let the tick loops schedule their first period.
    sleep(Duration::from_millis(1)).await;
    session.set_auto_mode(false);
    session.set_signal_timing_seconds(50).unwrap();

    // The period already under way was scheduled with the 4 s auto cadence.
    sleep(Duration::from_millis(4500)).await;
    assert_eq!(session.tick_counts().0, 1);

    sleep(Duration::from_millis(49_000)).await;
    assert_eq!(session.tick_counts().0, 1);

    sleep(Duration::from_millis(1000)).await;
    assert_eq!(session.tick_counts().0, 2);
}

/// A rejected timing update leaves the running cadence alone.
#[tokio::test(start_paused = true)]
async fn rejected_timing_keeps_previous_value() {
    let session = Session::start(SessionConfig {
        auto_mode: false,
        signal_timing_secs: 20,
        ..config()
    })
    .unwrap();

    assert!(session.set_signal_timing_seconds(10).is_err());
    assert_eq!(session.controls().signal_timing_secs, 20);

    sleep(Duration::from_millis(20_500)).await;
    assert_eq!(session.tick_counts().0, 1);
}
