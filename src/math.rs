pub mod geometry;
pub mod stats;

pub use geometry::{distance, Located, Location};
pub use stats::mean;
