use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reefsim_core::config::AppConfig;
use reefsim_core::field::Field;
use reefsim_core::simulator::Simulator;
use reefsim_core::Location;

fn populated(depth: usize, width: usize) -> Simulator {
    let mut config = AppConfig::default();
    config.world.depth = depth;
    config.world.width = width;
    config.world.seed = Some(42);
    config.world.log_interval = 0;
    let mut sim = Simulator::new(config).expect("default config is valid");
    sim.populate().expect("fresh field has room");
    sim
}

fn bench_step_default_reef(c: &mut Criterion) {
    c.bench_function("step_80x120", |b| {
        b.iter_batched(
            || populated(80, 120),
            |mut sim| black_box(sim.simulate_one_step().map(|r| r.counts.total())),
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_simulate_small_reef(c: &mut Criterion) {
    c.bench_function("simulate_20x30_50_steps", |b| {
        b.iter_batched(
            || populated(20, 30),
            |mut sim| black_box(sim.simulate(50)),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_free_adjacent(c: &mut Criterion) {
    let field = Field::new(100, 100);
    c.bench_function("free_adjacent_locations", |b| {
        b.iter(|| black_box(field.free_adjacent_locations(Location::new(50, 50))))
    });
}

criterion_group!(
    benches,
    bench_step_default_reef,
    bench_simulate_small_reef,
    bench_free_adjacent
);
criterion_main!(benches);
