pub mod k_means;
pub mod linear_regression;

// Re-export public types and functions
pub use k_means::{
    closest_index, find_centroid, find_closest, group_by_centroid, k_means, KMeansConfig,
};
pub use linear_regression::LinearRegression;
