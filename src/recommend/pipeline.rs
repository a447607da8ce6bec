//! End-to-end recommendation flow.
//!
//! Loading data and drawing maps happen outside this crate. They plug in
//! through [`DataProvider`] and [`Renderer`].

use std::collections::HashMap;

use log::info;

use crate::cs::randomized::Sampler;
use crate::error::{Error, Result};
use crate::math::geometry::Location;
use crate::ml::classic::k_means::{k_means, KMeansConfig};
use crate::recommend::feature::feature_set;
use crate::recommend::model::{Restaurant, User};
use crate::recommend::rating::{rate_all, search};

/// Source of restaurants, categories and saved users.
pub trait DataProvider {
    /// Every known restaurant.
    fn restaurants(&self) -> &[Restaurant];

    /// Every valid category label.
    fn categories(&self) -> &[String];

    /// # Errors
    /// - [`Error::UnknownUser`] if nothing is stored for `user_id`.
    fn load_user(&self, user_id: &str) -> Result<User>;
}

/// Draws the final map.
pub trait Renderer {
    fn draw_map(
        &mut self,
        centroids: &[Location],
        restaurants: &[&Restaurant],
        ratings: &HashMap<String, f64>,
    ) -> Result<()>;
}

/// [`DataProvider`] over data already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    restaurants: Vec<Restaurant>,
    categories: Vec<String>,
    users: HashMap<String, User>,
}

impl InMemoryProvider {
    /// Categories are collected from `restaurants`, sorted and deduplicated.
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        let mut categories: Vec<String> = restaurants
            .iter()
            .flat_map(|r| r.categories().iter().cloned())
            .collect();
        categories.sort();
        categories.dedup();
        Self {
            restaurants,
            categories,
            users: HashMap::new(),
        }
    }

    /// Stores `user` under `user_id`, replacing any earlier user with that id.
    pub fn with_user(mut self, user_id: impl Into<String>, user: User) -> Self {
        self.users.insert(user_id.into(), user);
        self
    }
}

impl DataProvider for InMemoryProvider {
    fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }

    fn load_user(&self, user_id: &str) -> Result<User> {
        self.users
            .get(user_id)
            .cloned()
            .ok_or_else(|| Error::UnknownUser(user_id.to_string()))
    }
}

/// What to recommend and how to draw it.
#[derive(Debug, Clone)]
pub struct RecommendOptions {
    /// User id handed to [`DataProvider::load_user`].
    pub user: String,
    /// Number of clusters. Without it, or with zero, every restaurant is its
    /// own centroid.
    pub k: Option<usize>,
    /// Only show restaurants in this category.
    pub query: Option<String>,
    /// Predict ratings for restaurants the user has not reviewed.
    pub predict: bool,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            user: "test_user".to_string(),
            k: None,
            query: None,
            predict: false,
        }
    }
}

impl RecommendOptions {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ..Self::default()
        }
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = Some(k);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_predict(mut self, predict: bool) -> Self {
        self.predict = predict;
        self
    }
}

/// Every restaurant name, sorted.
pub fn restaurant_names<P: DataProvider + ?Sized>(provider: &P) -> Vec<&str> {
    let mut names: Vec<&str> = provider.restaurants().iter().map(Restaurant::name).collect();
    names.sort_unstable();
    names
}

/// Selects restaurants, rates them, clusters them and hands the result to
/// `renderer`.
///
/// 1. With a query, keep only restaurants in that category.
/// 2. Load the user.
/// 3. With `predict`, rate every selected restaurant (own rating or estimate).
///    Otherwise keep only the restaurants the user reviewed, with their ratings.
/// 4. With a nonzero `k`, centroids come from k-means (`k` capped at the
///    number of restaurants). Otherwise each restaurant's location is a centroid.
///
/// # Errors
/// - [`Error::UnknownCategory`] if the query is not a known category.
/// - Anything the provider, the rating step, k-means or the renderer reports.
pub fn recommend<P, S, D>(
    provider: &P,
    options: &RecommendOptions,
    sampler: &mut S,
    renderer: &mut D,
) -> Result<()>
where
    P: DataProvider + ?Sized,
    S: Sampler,
    D: Renderer + ?Sized,
{
    let all = provider.restaurants();
    let mut restaurants: Vec<&Restaurant> = match &options.query {
        Some(query) => {
            if !provider.categories().iter().any(|c| c == query) {
                return Err(Error::UnknownCategory(query.clone()));
            }
            search(query, all)
        }
        None => all.iter().collect(),
    };

    let user = provider.load_user(&options.user)?;

    let ratings = if options.predict {
        rate_all(&user, &restaurants, all, &feature_set())?
    } else {
        restaurants = user.reviewed_restaurants(&restaurants).into_iter().copied().collect();
        restaurants
            .iter()
            .map(|r| user.rating(r.name()).map(|rating| (r.name().to_string(), rating)))
            .collect::<Result<HashMap<String, f64>>>()?
    };

    let centroids = match options.k.filter(|&k| k > 0) {
        Some(k) => {
            let config = KMeansConfig::new(k.min(restaurants.len()));
            k_means(&restaurants, &config, sampler)?
        }
        None => restaurants.iter().map(|r| r.location()).collect(),
    };

    info!(
        "drawing {} restaurants around {} centroids for {}",
        restaurants.len(),
        centroids.len(),
        user.name()
    );
    renderer.draw_map(&centroids, &restaurants, &ratings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::randomized::RandomSampler;
    use crate::recommend::model::Review;
    use approx::assert_relative_eq;

    /// Picks items by fixed index.
    struct FixedSampler(Vec<usize>);

    impl Sampler for FixedSampler {
        fn sample<'a, T>(&mut self, items: &'a [T], _k: usize) -> Vec<&'a T> {
            self.0.iter().map(|&i| &items[i]).collect()
        }
    }

    #[derive(Default)]
    struct Capture {
        centroids: Vec<Location>,
        names: Vec<String>,
        ratings: HashMap<String, f64>,
    }

    impl Renderer for Capture {
        fn draw_map(
            &mut self,
            centroids: &[Location],
            restaurants: &[&Restaurant],
            ratings: &HashMap<String, f64>,
        ) -> Result<()> {
            self.centroids = centroids.to_vec();
            self.names = restaurants.iter().map(|r| r.name().to_string()).collect();
            self.ratings = ratings.clone();
            Ok(())
        }
    }

    fn restaurant(
        name: &str,
        location: (f64, f64),
        category: &str,
        price: f64,
        ratings: &[f64],
    ) -> Restaurant {
        Restaurant::new(
            name,
            location,
            vec![category.to_string()],
            price,
            ratings.iter().map(|&r| Review::new(name, r)).collect(),
        )
    }

    fn provider() -> InMemoryProvider {
        let restaurants = vec![
            restaurant("Noodle Bar", (0.0, 0.0), "Noodles", 1.0, &[2.0]),
            restaurant("Cheese Board", (0.0, 1.0), "Pizza", 2.0, &[4.0, 5.0]),
            restaurant("Pho King", (10.0, 0.0), "Noodles", 3.0, &[3.0, 4.0]),
            restaurant("Arinell", (10.0, 1.0), "Pizza", 4.0, &[5.0]),
        ];
        let user = User::new(
            "test_user",
            vec![
                Review::new("Noodle Bar", 2.0),
                Review::new("Cheese Board", 3.0),
                Review::new("Pho King", 4.0),
            ],
        );
        InMemoryProvider::new(restaurants).with_user("test_user", user)
    }

    #[test]
    fn test_provider() {
        let provider = provider();
        assert_eq!(
            provider.categories().to_vec(),
            vec!["Noodles".to_string(), "Pizza".to_string()]
        );
        assert_eq!(
            restaurant_names(&provider),
            vec!["Arinell", "Cheese Board", "Noodle Bar", "Pho King"]
        );
        assert_eq!(
            provider.load_user("nobody"),
            Err(Error::UnknownUser("nobody".to_string()))
        );
    }

    #[test]
    fn test_reviewed_only_without_clustering() {
        let provider = provider();
        let mut renderer = Capture::default();
        recommend(
            &provider,
            &RecommendOptions::default(),
            &mut RandomSampler::seeded(1),
            &mut renderer,
        )
        .unwrap();

        assert_eq!(renderer.names, vec!["Noodle Bar", "Cheese Board", "Pho King"]);
        assert_eq!(renderer.ratings.len(), 3);
        assert_eq!(renderer.ratings["Pho King"], 4.0);
        assert_eq!(
            renderer.centroids,
            vec![
                Location::new(0.0, 0.0),
                Location::new(0.0, 1.0),
                Location::new(10.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_predict_and_cluster() {
        let provider = provider();
        let mut renderer = Capture::default();
        let options = RecommendOptions::new("test_user").with_predict(true).with_k(2);
        let mut sampler = FixedSampler(vec![0, 2]);
        recommend(&provider, &options, &mut sampler, &mut renderer).unwrap();

        assert_eq!(renderer.names.len(), 4);
        assert_eq!(renderer.ratings["Noodle Bar"], 2.0);
        // Ratings track price exactly: 2, 3, 4 for prices 1, 2, 3. No other
        // feature fits as well.
        assert_relative_eq!(renderer.ratings["Arinell"], 5.0, epsilon = 1e-12);
        assert_eq!(
            renderer.centroids,
            vec![Location::new(0.0, 0.5), Location::new(10.0, 0.5)]
        );
    }

    #[test]
    fn test_zero_k_uses_each_location() {
        let provider = provider();
        let mut renderer = Capture::default();
        let options = RecommendOptions::new("test_user").with_k(0);
        recommend(&provider, &options, &mut FixedSampler(vec![]), &mut renderer).unwrap();

        assert_eq!(renderer.names, vec!["Noodle Bar", "Cheese Board", "Pho King"]);
        assert_eq!(
            renderer.centroids,
            vec![
                Location::new(0.0, 0.0),
                Location::new(0.0, 1.0),
                Location::new(10.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_query_with_k_larger_than_selection() {
        let provider = provider();
        let mut renderer = Capture::default();
        let options = RecommendOptions::new("test_user")
            .with_query("Pizza")
            .with_predict(true)
            .with_k(10);
        recommend(&provider, &options, &mut RandomSampler::seeded(9), &mut renderer).unwrap();

        assert_eq!(renderer.names, vec!["Cheese Board", "Arinell"]);
        assert_eq!(renderer.centroids.len(), 2);
    }

    #[test]
    fn test_unknown_category() {
        let provider = provider();
        let options = RecommendOptions::new("test_user").with_query("Sushi");
        let result = recommend(
            &provider,
            &options,
            &mut RandomSampler::seeded(0),
            &mut Capture::default(),
        );
        assert_eq!(result, Err(Error::UnknownCategory("Sushi".to_string())));
    }

    #[test]
    fn test_unknown_user() {
        let provider = provider();
        let options = RecommendOptions::new("ghost");
        let result = recommend(
            &provider,
            &options,
            &mut RandomSampler::seeded(0),
            &mut Capture::default(),
        );
        assert_eq!(result, Err(Error::UnknownUser("ghost".to_string())));
    }
}
