use criterion::{black_box, criterion_group, criterion_main, Criterion};
use entropy_words::pool::{build_pool, LengthBounds};
use entropy_words::sampler::sample;
use entropy_words::RngEntropy;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

fn bench_sample(c: &mut Criterion) {
    let words: Vec<String> = (0..50_000u32)
        .map(|n| {
            format!("{:0>6}", n)
                .bytes()
                .map(|b| (b - b'0' + b'a') as char)
                .collect()
        })
        .collect();
    let pool = build_pool(&words, LengthBounds::normalized(6, 6), "bench").unwrap();

    c.bench_function("sample 120 words from 50k pool", |b| {
        let mut entropy = RngEntropy::new(ChaCha20Rng::seed_from_u64(0));
        b.iter(|| sample(black_box(&pool), 120, &mut entropy).unwrap())
    });
}

criterion_group!(benches, bench_sample);
criterion_main!(benches);
