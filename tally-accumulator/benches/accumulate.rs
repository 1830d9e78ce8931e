use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tally_accumulator::{genkeys, hash_to_prime, publicly, secretly, AccumulatorParams, DeterministicSource};

fn hash_to_prime_bench(c: &mut Criterion) {
    let params = AccumulatorParams::from_exponent(7).unwrap();
    c.bench_function("hash_to_prime_128", |b| {
        b.iter(|| {
            let _ = hash_to_prime(&params, black_box(b"pewpew")).unwrap();
        })
    });
}

fn accumulate_bench(c: &mut Criterion) {
    let params = AccumulatorParams::from_exponent(7).unwrap();
    let key = genkeys(&params, &mut DeterministicSource::from_u64(5)).unwrap();
    let public = key.public_key();
    let items: Vec<&[u8]> = vec![b"pewpew", b"bangbang", b"ansuz", b"borb", b"blammo"];

    c.bench_function("secretly_5_items", |b| {
        b.iter(|| {
            let _ = secretly(&key, &params, black_box(&items)).unwrap();
        })
    });
    c.bench_function("publicly_5_items", |b| {
        b.iter(|| {
            let _ = publicly(&public, &params, black_box(&items)).unwrap();
        })
    });
}

criterion_group!(benches, hash_to_prime_bench, accumulate_bench);
criterion_main!(benches);
