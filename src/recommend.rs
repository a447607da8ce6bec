pub mod feature;
pub mod model;
pub mod pipeline;
pub mod rating;

pub use feature::{feature_set, Feature};
pub use model::{Restaurant, Review, User};
pub use pipeline::{
    recommend, restaurant_names, DataProvider, InMemoryProvider, RecommendOptions, Renderer,
};
pub use rating::{best_predictor, find_predictor, rate_all, search, Predictor};
