use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use weighted_edit_distance::{edit_distance_with, CostParameters, DistanceTable};

fn random_word(rng: &mut ChaCha20Rng, len: usize) -> Vec<char> {
    (0..len).map(|_| rng.gen_range('a'..='z')).collect()
}

fn bench_edit_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("Edit Distance");
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let costs = CostParameters::default();

    for &len in &[8, 15, 64, 256, 1024] {
        let word = random_word(&mut rng, len);
        let guess = random_word(&mut rng, len);

        group.bench_with_input(BenchmarkId::new("rolling_rows", len), &len, |b, _| {
            b.iter(|| edit_distance_with(black_box(&word), black_box(&guess), &costs))
        });

        if len <= 256 {
            group.bench_with_input(BenchmarkId::new("full_table", len), &len, |b, _| {
                b.iter(|| DistanceTable::build(black_box(&word), black_box(&guess), &costs))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_edit_distance);
criterion_main!(benches);
