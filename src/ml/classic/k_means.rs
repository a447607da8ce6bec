use log::{debug, trace};

use crate::cs::grouping::{group_by_first, group_pairs};
use crate::cs::randomized::Sampler;
use crate::error::{Error, Result};
use crate::math::geometry::{distance, Located, Location};
use crate::math::stats::mean;

/// Configuration options for k-means clustering.
#[derive(Debug, Clone)]
pub struct KMeansConfig {
    /// Number of clusters to find.
    pub k: usize,
    /// Maximum number of centroid updates. The loop also stops as soon as an
    /// update leaves every centroid exactly where it was.
    pub max_updates: usize,
}

impl KMeansConfig {
    /// Create a new config with the default cap of 100 updates.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_updates: 100,
        }
    }

    /// Customize the maximum number of updates.
    pub fn with_max_updates(mut self, max_updates: usize) -> Self {
        self.max_updates = max_updates;
        self
    }
}

/// Index of the centroid closest to `location`. Ties go to the earliest centroid.
/// Returns `None` when `centroids` is empty.
pub fn closest_index(location: Location, centroids: &[Location]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &centroid) in centroids.iter().enumerate() {
        let dist = distance(location, centroid);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((idx, dist)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Returns the centroid in `centroids` closest to `location`; the first one wins ties.
///
/// # Errors
/// - [`Error::InsufficientData`] if `centroids` is empty.
///
/// # Example
///
/// ```
/// use restaurant_maps::math::geometry::Location;
/// use restaurant_maps::ml::classic::k_means::find_closest;
///
/// let centroids: Vec<Location> = vec![
///     [0.0, 0.0].into(),
///     [2.0, 3.0].into(),
///     [4.0, 3.0].into(),
///     [5.0, 5.0].into(),
/// ];
/// let closest = find_closest([3.0, 4.0].into(), &centroids).unwrap();
/// assert_eq!(closest, Location::new(2.0, 3.0));
/// ```
pub fn find_closest(location: Location, centroids: &[Location]) -> Result<Location> {
    closest_index(location, centroids)
        .map(|idx| centroids[idx])
        .ok_or_else(|| Error::InsufficientData("no centroids to compare against".to_string()))
}

/// Splits `items` into clusters, one per centroid that at least one item is
/// closest to. Clusters come out in the order their first member appears.
pub fn group_by_centroid<'a, T: Located>(
    items: &'a [T],
    centroids: &[Location],
) -> Result<Vec<Vec<&'a T>>> {
    let pairs = items
        .iter()
        .map(|item| find_closest(item.location(), centroids).map(|c| (c, item)))
        .collect::<Result<Vec<_>>>()?;
    Ok(group_by_first(pairs))
}

/// Component-wise mean of the locations in `cluster`.
///
/// # Errors
/// - [`Error::EmptySequence`] if `cluster` is empty.
pub fn find_centroid<T: Located>(cluster: &[T]) -> Result<Location> {
    let xs: Vec<f64> = cluster.iter().map(|item| item.location().x).collect();
    let ys: Vec<f64> = cluster.iter().map(|item| item.location().y).collect();
    Ok(Location::new(mean(&xs)?, mean(&ys)?))
}

/// One assignment + update round. A centroid with no members stays put, so the
/// result always has as many entries as `centroids`, in the same order.
fn update_centroids<T: Located>(items: &[T], centroids: &[Location]) -> Result<Vec<Location>> {
    let mut pairs = Vec::with_capacity(items.len());
    for item in items {
        let location = item.location();
        let idx = closest_index(location, centroids).ok_or_else(|| {
            Error::InsufficientData("no centroids to compare against".to_string())
        })?;
        pairs.push((idx, location));
    }

    let mut next = centroids.to_vec();
    for (idx, cluster) in group_pairs(pairs) {
        next[idx] = find_centroid(&cluster)?;
    }
    Ok(next)
}

/// Runs k-means over the locations of `items` and returns the final centroids.
///
/// Initial centroids are the locations of `k` distinct items drawn by
/// `sampler`; after that the iteration is deterministic. The loop stops when an
/// update reproduces the previous centroids exactly, or after
/// `config.max_updates` updates.
///
/// `k == 0` yields no centroids.
///
/// # Errors
/// - [`Error::InsufficientData`] if `config.k` exceeds `items.len()`, or the
///   sampler hands back fewer than `k` items.
///
/// # Example
///
/// ```
/// use restaurant_maps::cs::randomized::RandomSampler;
/// use restaurant_maps::math::geometry::Location;
/// use restaurant_maps::ml::classic::k_means::{k_means, KMeansConfig};
///
/// let points: Vec<Location> = vec![
///     [1.0, 2.0].into(),
///     [1.5, 1.8].into(),
///     [5.0, 8.0].into(),
///     [8.0, 8.0].into(),
/// ];
///
/// let mut sampler = RandomSampler::seeded(3);
/// let centroids = k_means(&points, &KMeansConfig::new(2), &mut sampler).unwrap();
/// assert_eq!(centroids.len(), 2);
/// ```
pub fn k_means<T, S>(items: &[T], config: &KMeansConfig, sampler: &mut S) -> Result<Vec<Location>>
where
    T: Located,
    S: Sampler,
{
    if config.k > items.len() {
        return Err(Error::InsufficientData(format!(
            "cannot find k = {} clusters among {} restaurants",
            config.k,
            items.len()
        )));
    }
    if config.k == 0 {
        return Ok(Vec::new());
    }

    let mut centroids: Vec<Location> = sampler
        .sample(items, config.k)
        .into_iter()
        .map(|item| item.location())
        .collect();
    if centroids.len() != config.k {
        return Err(Error::InsufficientData(format!(
            "sampler returned {} of {} initial centroids",
            centroids.len(),
            config.k
        )));
    }

    for update in 1..=config.max_updates {
        let next = update_centroids(items, &centroids)?;
        trace!("k-means update {update}: {next:?}");
        if next == centroids {
            debug!("k-means converged after {update} updates (k = {})", config.k);
            return Ok(centroids);
        }
        centroids = next;
    }

    debug!(
        "k-means stopped at the cap of {} updates (k = {})",
        config.max_updates, config.k
    );
    Ok(centroids)
}
