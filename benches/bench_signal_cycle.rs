// benches/bench_signal_cycle.rs
use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, Criterion, PlotConfiguration,
};
use network_dashboard::control_system::traffic_light_controller::SignalCycleEngine;
use network_dashboard::simulation_engine::intersections::{Density, LightState, SignalNode};
use network_dashboard::simulation_engine::network::NetworkState;
use std::time::Duration;

// Builds a network with `num_signals` signals spread over the map and no vehicles.
fn create_signal_network(num_signals: usize) -> NetworkState {
    let signals = (0..num_signals)
        .map(|i| {
            SignalNode::new(
                &format!("signal-{}", i),
                &format!("Street {}", i),
                (i % 100) as f64,
                ((i / 100) % 100) as f64,
                LightState::CYCLE[i % 3],
                Density::Medium,
            )
        })
        .collect();
    NetworkState::new(signals, Vec::new())
}

fn bench_advance_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("signal_cycle");

    group.sample_size(100);
    group.measurement_time(Duration::from_secs(5));
    group.warm_up_time(Duration::from_secs(2));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Linear));

    // Networks with 50, 100, and 200 signals.
    for &size in [50, 100, 200].iter() {
        group.bench_function(format!("size_{}", size), |b| {
            let engine = SignalCycleEngine::default();
            let mut network = create_signal_network(size);
            b.iter(|| {
                engine.advance_all(&mut network);
                black_box(&network);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance_all);
criterion_main!(benches);
