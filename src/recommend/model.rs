//! Reviews, users and restaurants.
//!
//! All three are read-only once built; the clustering and regression code
//! only ever borrows them.

use std::borrow::Borrow;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::math::geometry::{Located, Location};
use crate::math::stats::mean;

/// A rating given to a restaurant, conventionally between 1 and 5 stars.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    restaurant_name: String,
    rating: f64,
}

impl Review {
    pub fn new(restaurant_name: impl Into<String>, rating: f64) -> Self {
        Self {
            restaurant_name: restaurant_name.into(),
            rating,
        }
    }

    pub fn restaurant_name(&self) -> &str {
        &self.restaurant_name
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }
}

/// A user and their reviews, keyed by restaurant name.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    name: String,
    reviews: HashMap<String, Review>,
}

impl User {
    /// Builds a user from a list of reviews. If the same restaurant is
    /// reviewed more than once, the last review wins.
    pub fn new(name: impl Into<String>, reviews: impl IntoIterator<Item = Review>) -> Self {
        let reviews = reviews
            .into_iter()
            .map(|review| (review.restaurant_name.clone(), review))
            .collect();
        Self {
            name: name.into(),
            reviews,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reviews(&self) -> &HashMap<String, Review> {
        &self.reviews
    }

    pub fn has_reviewed(&self, restaurant_name: &str) -> bool {
        self.reviews.contains_key(restaurant_name)
    }

    /// The rating this user gave `restaurant_name`.
    ///
    /// # Errors
    /// - [`Error::UnknownKey`] if the user never reviewed it.
    pub fn rating(&self, restaurant_name: &str) -> Result<f64> {
        self.reviews
            .get(restaurant_name)
            .map(Review::rating)
            .ok_or_else(|| Error::UnknownKey(restaurant_name.to_string()))
    }

    /// The subset of `restaurants` this user reviewed, in their original order.
    pub fn reviewed_restaurants<'a, R>(&self, restaurants: &'a [R]) -> Vec<&'a R>
    where
        R: Borrow<Restaurant>,
    {
        restaurants
            .iter()
            .filter(|&r| self.has_reviewed(r.borrow().name()))
            .collect()
    }
}

/// A restaurant, identified by its unique name.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    name: String,
    location: Location,
    categories: Vec<String>,
    price: f64,
    reviews: Vec<Review>,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<Location>,
        categories: Vec<String>,
        price: f64,
        reviews: Vec<Review>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            categories,
            price,
            reviews,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Every rating this restaurant received, in review order.
    pub fn ratings(&self) -> Vec<f64> {
        self.reviews.iter().map(Review::rating).collect()
    }

    pub fn num_ratings(&self) -> usize {
        self.reviews.len()
    }

    /// # Errors
    /// - [`Error::EmptySequence`] if the restaurant has no reviews.
    pub fn mean_rating(&self) -> Result<f64> {
        mean(&self.ratings())
    }
}

impl Located for Restaurant {
    fn location(&self) -> Location {
        self.location
    }
}
