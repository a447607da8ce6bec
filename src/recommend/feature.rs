use std::fmt;

use crate::error::Result;
use crate::recommend::model::Restaurant;

/// A scalar extracted from a restaurant, used as the regression input.
#[derive(Clone, Copy)]
pub enum Feature {
    MeanRating,
    Price,
    NumRatings,
    /// First location coordinate.
    LocationX,
    /// Second location coordinate.
    LocationY,
    /// Any other pure function of a restaurant. Non-capturing closures coerce
    /// to the function pointer.
    Custom(&'static str, fn(&Restaurant) -> f64),
}

impl Feature {
    pub fn name(&self) -> &'static str {
        match self {
            Feature::MeanRating => "mean_rating",
            Feature::Price => "price",
            Feature::NumRatings => "num_ratings",
            Feature::LocationX => "location_x",
            Feature::LocationY => "location_y",
            Feature::Custom(name, _) => *name,
        }
    }

    /// # Errors
    /// - [`crate::Error::EmptySequence`] for [`Feature::MeanRating`] on a
    ///   restaurant with no reviews.
    pub fn extract(&self, restaurant: &Restaurant) -> Result<f64> {
        Ok(match self {
            Feature::MeanRating => restaurant.mean_rating()?,
            Feature::Price => restaurant.price(),
            Feature::NumRatings => restaurant.num_ratings() as f64,
            Feature::LocationX => restaurant.location().x,
            Feature::LocationY => restaurant.location().y,
            Feature::Custom(_, f) => f(restaurant),
        })
    }
}

impl fmt::Debug for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The standard candidate features, in the order predictor selection tries them.
pub fn feature_set() -> Vec<Feature> {
    vec![
        Feature::MeanRating,
        Feature::Price,
        Feature::NumRatings,
        Feature::LocationX,
        Feature::LocationY,
    ]
}
