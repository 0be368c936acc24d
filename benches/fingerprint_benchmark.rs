use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use etag_validator::{fingerprint::generate, Algorithm, Strength};

fn fingerprint_algorithm_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint_algorithm");
    let body = vec![b'x'; 16384];

    for algorithm in [Algorithm::Sha256, Algorithm::Sha1, Algorithm::Md5].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm),
            algorithm,
            |b, &algorithm| {
                b.iter(|| generate(black_box(&body), algorithm, Strength::Strong));
            },
        );
    }

    group.finish();
}

fn fingerprint_body_size_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint_body_size");

    for size in [1024, 10240, 102400, 1048576].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let body = vec![0u8; size];
            b.iter(|| generate(black_box(&body), Algorithm::Sha256, Strength::Weak));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    fingerprint_algorithm_benchmark,
    fingerprint_body_size_benchmark
);
criterion_main!(benches);
