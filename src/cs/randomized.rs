pub mod reservoir_sampling;

pub use reservoir_sampling::{reservoir_sampling, RandomSampler, Sampler};
