use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use pancake_core::ticks;

fn bench_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("ticks");
    let domains = [(0.0, 100.0), (0.0, 1.0), (1958.2, 2019.9), (313.5, 411.2), (-1.0e-6, 3.0e-6)];
    for &count in &[5usize, 10usize, 50usize] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("count{count}")), &count, |b, &n| {
            b.iter(|| {
                for &(lo, hi) in &domains {
                    black_box(ticks(black_box(lo), black_box(hi), n));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ticks);
criterion_main!(benches);
