//! Error types shared by the clustering, regression and recommendation code.

use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the core can report. None of them are transient: they all
/// come from malformed or too-small input, so callers should not retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Mean requested on a sequence with no elements.
    #[error("cannot find mean of empty sequence")]
    EmptySequence,

    /// Not enough items to cluster, or nothing to regress over.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Zero variance in feature or rating values.
    #[error("degenerate model: {0}")]
    DegenerateModel(String),

    /// Restaurant name missing from a user's reviews.
    #[error("no review for restaurant: {0}")]
    UnknownKey(String),

    /// The data provider has nothing stored for this user id.
    #[error("unknown user: {0}")]
    UnknownUser(String),

    /// Search query that is not one of the known categories.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
