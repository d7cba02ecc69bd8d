use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dynsell::batch::{generate, RateRange};
use dynsell::solver::solve;
use rand::{rngs::StdRng, SeedableRng};

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    let rates = RateRange::default();
    for &n in &[50usize, 200, 800] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter_batched(
                || generate(n, &rates, &mut rng),
                |table| solve(&table).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
