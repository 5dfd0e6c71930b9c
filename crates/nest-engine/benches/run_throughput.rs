use criterion::{criterion_group, criterion_main, Criterion};
use nest_engine::{run, run_batch, BatchConfig, RunConfig};
use nest_models::GaussianWell;

fn bench_single_run(c: &mut Criterion) {
    let well = GaussianWell::new(100.0).unwrap();
    let config = RunConfig::new(50, 2e-3);

    c.bench_function("nested_run_n50", |b| {
        b.iter(|| {
            let _ = run(&config, &well, &well).unwrap();
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let well = GaussianWell::new(100.0).unwrap();
    let config = BatchConfig {
        run: RunConfig::new(32, 1e-3),
        runs: 20,
        ..BatchConfig::default()
    };

    c.bench_function("nested_batch_20x32", |b| {
        b.iter(|| {
            let _ = run_batch(&config, &well, &well).unwrap();
        })
    });
}

criterion_group!(benches, bench_single_run, bench_batch);
criterion_main!(benches);
