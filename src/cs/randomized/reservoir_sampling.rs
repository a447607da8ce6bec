use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Returns a reservoir sample of k items from the given iterator, drawing
/// randomness from `rng`.
/// This function processes the iterator in a single pass and selects k items uniformly at random.
/// If the iterator yields fewer than k items, all of them are returned.
pub fn reservoir_sampling<T, I, R>(iter: I, k: usize, rng: &mut R) -> Vec<T>
where
    I: Iterator<Item = T>,
    R: Rng,
{
    let mut reservoir = Vec::with_capacity(k);
    if k == 0 {
        return reservoir;
    }
    for (i, item) in iter.enumerate() {
        if i < k {
            reservoir.push(item);
        } else {
            let r = rng.gen_range(0..=i);
            if r < k {
                reservoir[r] = item;
            }
        }
    }
    reservoir
}

/// A source of random subsets, used to seed k-means.
pub trait Sampler {
    /// Returns `k` distinct elements of `items` (fewer only when `items.len() < k`).
    fn sample<'a, T>(&mut self, items: &'a [T], k: usize) -> Vec<&'a T>;
}

/// [`Sampler`] backed by a `rand` RNG, using reservoir sampling.
#[derive(Debug, Clone)]
pub struct RandomSampler<R> {
    rng: R,
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSampler<ChaCha20Rng> {
    /// Non-deterministic sampler seeded from the OS.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha20Rng::from_entropy())
    }

    /// Reproducible sampler.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Sampler for RandomSampler<R> {
    fn sample<'a, T>(&mut self, items: &'a [T], k: usize) -> Vec<&'a T> {
        reservoir_sampling(items.iter(), k, &mut self.rng)
    }
}
