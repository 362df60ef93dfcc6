//! Benchmarks for signature encoding and similarity computation.
//!
//! Encoding dominates a benchmark run (one dot product per signature bit);
//! the Hamming comparison should be near-free by contrast.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use slant::{
    angular_similarity, compute_signature, generate_random_projection, hash_similarity,
    sample_vector,
};

fn bench_encode_dimensions(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_signature");
    let mut rng = StdRng::seed_from_u64(42);

    for dim in [64, 128, 256, 384, 768].iter() {
        group.throughput(Throughput::Elements(*dim as u64));

        let m = generate_random_projection(*dim, 128, &mut rng).unwrap();
        let v = sample_vector(*dim, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(dim), dim, |bench, _| {
            bench.iter(|| compute_signature(black_box(&m), black_box(&v)).unwrap());
        });
    }

    group.finish();
}

fn bench_hash_similarity_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_similarity");
    let mut rng = StdRng::seed_from_u64(42);

    for bits in [64, 256, 1024, 4096].iter() {
        group.throughput(Throughput::Elements(*bits as u64));

        let m = generate_random_projection(32, *bits, &mut rng).unwrap();
        let a = compute_signature(&m, &sample_vector(32, &mut rng)).unwrap();
        let b = compute_signature(&m, &sample_vector(32, &mut rng)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(bits), bits, |bench, _| {
            bench.iter(|| hash_similarity(black_box(&a), black_box(&b)).unwrap());
        });
    }

    group.finish();
}

fn bench_angular_dimensions(c: &mut Criterion) {
    let mut group = c.benchmark_group("angular_similarity");
    let mut rng = StdRng::seed_from_u64(42);

    for dim in [64, 128, 256, 384, 768].iter() {
        group.throughput(Throughput::Elements(*dim as u64));

        let a = sample_vector(*dim, &mut rng);
        let b = sample_vector(*dim, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(dim), dim, |bench, _| {
            bench.iter(|| angular_similarity(black_box(&a), black_box(&b)).unwrap());
        });
    }

    group.finish();
}

fn bench_full_trial(c: &mut Criterion) {
    // One benchmark trial end to end: sample a pair, encode both, compare
    // both ways. This is what run_benchmark repeats.
    let mut group = c.benchmark_group("trial");
    let dim = 50;

    for bits in [16, 64, 256].iter() {
        let mut rng = StdRng::seed_from_u64(42);
        let m = generate_random_projection(dim, *bits, &mut rng).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(bits), bits, |bench, _| {
            bench.iter(|| {
                let a = sample_vector(dim, &mut rng);
                let b = sample_vector(dim, &mut rng);

                let est = hash_similarity(
                    &compute_signature(&m, &a).unwrap(),
                    &compute_signature(&m, &b).unwrap(),
                )
                .unwrap();
                let exact = angular_similarity(&a, &b).unwrap();
                black_box((exact - est).abs())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode_dimensions,
    bench_hash_similarity_bits,
    bench_angular_dimensions,
    bench_full_trial,
);
criterion_main!(benches);
