use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vouch_core::IgnoreStrategy;
use vouch_float::{compare_distance, FloatSubject, Tolerance};

fn sample_pairs(seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pairs = Vec::with_capacity(1024);
    while pairs.len() < 1024 {
        let a = f64::from_bits(rng.gen::<u64>());
        let e = f64::from_bits(rng.gen::<u64>());
        if a.is_finite() && e.is_finite() {
            pairs.push((a, e));
        }
    }
    pairs
}

fn tolerance_benchmark(c: &mut Criterion) {
    let pairs = sample_pairs(0x5EED);
    let tolerance = Tolerance::new(1.0e-6).expect("tolerance");

    c.bench_function("tolerance/compare_distance", |b| {
        b.iter(|| {
            for &(a, e) in &pairs {
                black_box(compare_distance(black_box(a), black_box(e), 1.0e-6));
            }
        });
    });

    c.bench_function("tolerance/admits", |b| {
        b.iter(|| {
            pairs
                .iter()
                .filter(|&&(a, e)| tolerance.admits(black_box(a), black_box(e)))
                .count()
        });
    });

    c.bench_function("tolerance/subject_chain", |b| {
        b.iter(|| {
            for &(a, e) in &pairs {
                FloatSubject::of(&IgnoreStrategy, black_box(a))
                    .is_within(1.0e-6)
                    .expect("tolerance")
                    .of(black_box(e));
            }
        });
    });
}

criterion_group!(benches, tolerance_benchmark);
criterion_main!(benches);
