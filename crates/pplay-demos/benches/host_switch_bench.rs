//! Benchmark: demo activation, switching and timer delivery.
//!
//! Run with: `cargo bench -p pplay-demos --bench host_switch_bench`

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use pplay_core::Duration;
use pplay_demos::DemoHost;

const TAGS: [&str; 10] = [
    "strategy-rpg",
    "observer-youtube",
    "decorator-coffee",
    "singleton-db",
    "factory-transport",
    "command-remote",
    "state-vending",
    "adapter-plug",
    "builder-robot",
    "template-barista",
];

// ===========================================================================
// Lifecycle
// ===========================================================================

fn bench_switch(c: &mut Criterion) {
    let mut group = c.benchmark_group("host_switch");

    group.bench_function("activate_same", |b| {
        let mut host = DemoHost::default();
        b.iter(|| black_box(host.activate(black_box("state-vending"))));
    });

    group.bench_function("cycle_all_demos", |b| {
        let mut host = DemoHost::default();
        b.iter(|| {
            for tag in TAGS {
                black_box(host.activate(tag));
            }
        });
    });

    group.bench_function("switch_with_pending_timers", |b| {
        let mut host = DemoHost::default();
        b.iter(|| {
            host.activate("template-barista");
            for _ in 0..8 {
                host.press_label("Run Simulation");
            }
            host.activate("adapter-plug");
            black_box(host.pending_timers())
        });
    });

    group.finish();
}

// ===========================================================================
// Timer delivery
// ===========================================================================

fn bench_narration(c: &mut Criterion) {
    c.bench_function("narration_full_run", |b| {
        let mut host = DemoHost::default();
        b.iter(|| {
            host.activate("composite-files");
            host.press_label("Run Simulation");
            black_box(host.advance(Duration::from_secs(5)))
        });
    });
}

criterion_group!(benches, bench_switch, bench_narration);
criterion_main!(benches);
