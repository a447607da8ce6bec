pub mod cs;
pub mod error;
pub mod math;
pub mod ml;
pub mod recommend;

pub use cs::{grouping, randomized};
pub use error::{Error, Result};
pub use math::{distance, mean, Located, Location};
