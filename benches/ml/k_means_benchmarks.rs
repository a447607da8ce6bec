use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use restaurant_maps::cs::randomized::RandomSampler;
use restaurant_maps::math::geometry::Location;
use restaurant_maps::ml::classic::k_means::{find_closest, k_means, KMeansConfig};

fn random_points(n: usize, seed: u64) -> Vec<Location> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| Location::new(rng.gen_range(37.7..37.9), rng.gen_range(-122.5..-122.2)))
        .collect()
}

fn bench_k_means(c: &mut Criterion) {
    let mut group = c.benchmark_group("k_means");

    for size in [100, 1_000, 5_000].iter() {
        let points = random_points(*size, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut sampler = RandomSampler::seeded(7);
                k_means(black_box(&points), &KMeansConfig::new(8), &mut sampler).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_find_closest(c: &mut Criterion) {
    let centroids = random_points(64, 1);
    let target = Location::new(37.8, -122.3);
    c.bench_function("find_closest_64", |b| {
        b.iter(|| find_closest(black_box(target), black_box(&centroids)).unwrap())
    });
}

criterion_group!(benches, bench_k_means, bench_find_closest);
criterion_main!(benches);
