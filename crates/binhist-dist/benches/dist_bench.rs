use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num::bigint::BigInt;
use num::rational::BigRational;

use binhist_dist::{digit_count, scientific, BinomialParams};

fn fair_coin(n: u64) -> BinomialParams {
    let half = BigRational::new(BigInt::from(1), BigInt::from(2));
    BinomialParams::new(n, half).unwrap()
}

// ---------------------------------------------------------------------------
// Full-distribution generation (the per-bucket recurrence end to end)
// ---------------------------------------------------------------------------

fn bench_samples_n500(c: &mut Criterion) {
    let params = fair_coin(500);
    c.bench_function("dist_samples_n500", |b| {
        b.iter(|| black_box(&params).samples().count())
    });
}

fn bench_samples_n2000(c: &mut Criterion) {
    let params = fair_coin(2000);
    c.bench_function("dist_samples_n2000", |b| {
        b.iter(|| black_box(&params).samples().count())
    });
}

// ---------------------------------------------------------------------------
// Magnitude estimation and formatting on multi-thousand-digit integers
// ---------------------------------------------------------------------------

fn bench_digit_count_huge(c: &mut Criterion) {
    let huge = BigInt::from(7u32).pow(20000);
    c.bench_function("dist_digit_count_17k_digits", |b| {
        b.iter(|| digit_count(black_box(&huge)))
    });
}

fn bench_scientific_huge(c: &mut Criterion) {
    let huge = BigInt::from(7u32).pow(20000);
    c.bench_function("dist_scientific_17k_digits", |b| {
        b.iter(|| scientific(black_box(&huge), 2, 12))
    });
}

criterion_group!(
    benches,
    bench_samples_n500,
    bench_samples_n2000,
    bench_digit_count_huge,
    bench_scientific_huge
);
criterion_main!(benches);
