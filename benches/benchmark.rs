//! Benchmarks for luhn_card.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use luhn_card::{
    generate_by_type_with_rng, generate_valid_with_rng, generate_with_prefix_rng, luhn,
    normalize, verify, CardType,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const VISA_16: &str = "4111111111111111";
const VISA_16_FORMATTED: &str = "4111-1111 1111-1111";
const AMEX: &str = "378282246310005";

const VISA_DIGITS: [u8; 16] = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
const VISA_PARTIAL: [u8; 15] = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];

/// Benchmark verification of raw input
fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify");

    group.bench_function("visa_16_raw", |b| b.iter(|| verify(black_box(VISA_16))));

    group.bench_function("visa_16_formatted", |b| {
        b.iter(|| verify(black_box(VISA_16_FORMATTED)))
    });

    group.bench_function("amex_15", |b| b.iter(|| verify(black_box(AMEX))));

    group.bench_function("normalize_only", |b| {
        b.iter(|| normalize(black_box(VISA_16_FORMATTED)))
    });

    group.finish();
}

/// Benchmark the checksum itself
fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("validate_16", |b| {
        b.iter(|| luhn::validate(black_box(&VISA_DIGITS)))
    });

    group.bench_function("check_digit_15", |b| {
        b.iter(|| luhn::check_digit(black_box(&VISA_PARTIAL)))
    });

    group.finish();
}

/// Benchmark generation across lengths and types
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let mut rng = StdRng::seed_from_u64(0);

    for length in [13usize, 16, 19] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("with_prefix", length),
            &length,
            |b, &length| b.iter(|| generate_with_prefix_rng("411111", length, &mut rng)),
        );
    }

    group.bench_function("valid_16", |b| {
        b.iter(|| generate_valid_with_rng(black_box(16), &mut rng))
    });

    for card_type in CardType::ALL {
        group.bench_with_input(
            BenchmarkId::new("by_type", card_type),
            &card_type,
            |b, card_type| b.iter(|| generate_by_type_with_rng(card_type.name(), &mut rng)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_verify, bench_luhn, bench_generate);
criterion_main!(benches);
