use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use simpair_fingerprint::{fingerprint, fingerprint_tokens, fnv1a};

fn bench_fnv(c: &mut Criterion) {
    let mut group = c.benchmark_group("fnv1a");

    for size in [16, 256, 4096].iter() {
        let bytes: Vec<u8> = (0..*size).map(|i| (i % 251) as u8).collect();
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_function(format!("bytes_{size}"), |b| {
            b.iter(|| fnv1a(black_box(&bytes)))
        });
    }

    group.finish();
}

fn bench_fingerprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint");

    for size in [100, 1000, 10000].iter() {
        let tokens: Vec<String> = (0..*size).map(|i| format!("feature{i}")).collect();
        let hashes: Vec<u64> = tokens.iter().map(|t| fnv1a(t.as_bytes())).collect();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function(format!("hashes_{size}"), |b| {
            b.iter(|| fingerprint(black_box(&hashes).iter().copied()))
        });
        group.bench_function(format!("tokens_{size}"), |b| {
            b.iter(|| fingerprint_tokens(black_box(&tokens)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fnv, bench_fingerprint);
criterion_main!(benches);
