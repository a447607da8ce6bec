pub mod grouping;
pub mod randomized;

pub use grouping::{group_by_first, group_pairs};
pub use randomized::{RandomSampler, Sampler};
