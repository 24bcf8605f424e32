use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};
use ziggurat_sampler::{Variant, ZigguratSampler};

const BATCH: usize = 1024;

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    for variant in Variant::ALL {
        let mut rng = ZigguratSampler::seeded(variant, 42);
        // Build the tables outside the timed loop
        black_box(rng.sample());
        group.bench_function(BenchmarkId::from_parameter(variant), |b| {
            b.iter(|| black_box(rng.sample()))
        });
    }
    group.finish();
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");
    let mut out = vec![0.0f64; BATCH];
    for variant in Variant::ALL {
        let mut rng = ZigguratSampler::seeded(variant, 42);
        group.bench_function(BenchmarkId::new(variant.name(), BATCH), |b| {
            b.iter(|| {
                rng.fill(&mut out);
                black_box(out[BATCH - 1]);
            })
        });
    }
    group.finish();
}

fn bench_source(c: &mut Criterion) {
    // Baseline: the bare cost of the words being consumed
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("StdRng::next_u64", |b| {
        b.iter(|| black_box(rand::RngCore::next_u64(&mut rng)))
    });
}

criterion_group!(benches, bench_sample, bench_fill, bench_source);
criterion_main!(benches);
