use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use restaurant_maps::recommend::{feature_set, rate_all, Restaurant, Review, User};

fn generate(n: usize) -> (Vec<Restaurant>, User) {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let restaurants: Vec<Restaurant> = (0..n)
        .map(|i| {
            let name = format!("restaurant_{i}");
            let reviews = (0..rng.gen_range(1..20))
                .map(|_| Review::new(name.clone(), rng.gen_range(1..=5) as f64))
                .collect();
            Restaurant::new(
                name,
                (rng.gen_range(37.7..37.9), rng.gen_range(-122.5..-122.2)),
                vec!["Restaurants".to_string()],
                rng.gen_range(1..=4) as f64,
                reviews,
            )
        })
        .collect();
    let user = User::new(
        "bench_user",
        restaurants
            .iter()
            .step_by(3)
            .map(|r| Review::new(r.name(), rng.gen_range(1..=5) as f64)),
    );
    (restaurants, user)
}

fn bench_rate_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("rate_all");
    let features = feature_set();

    for size in [30, 300, 3_000].iter() {
        let (restaurants, user) = generate(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                rate_all(black_box(&user), &restaurants, &restaurants, &features).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rate_all);
criterion_main!(benches);
