use std::borrow::Borrow;
use std::collections::HashMap;

use log::debug;

use crate::error::{Error, Result};
use crate::ml::classic::linear_regression::LinearRegression;
use crate::recommend::feature::Feature;
use crate::recommend::model::{Restaurant, User};

/// Predicts a user's rating of a restaurant as `slope * feature(restaurant) + intercept`.
#[derive(Debug, Clone, Copy)]
pub struct Predictor {
    feature: Feature,
    model: LinearRegression,
}

impl Predictor {
    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub fn model(&self) -> &LinearRegression {
        &self.model
    }

    /// Estimated rating for `restaurant`.
    pub fn predict(&self, restaurant: &Restaurant) -> Result<f64> {
        Ok(self.model.evaluate(self.feature.extract(restaurant)?))
    }
}

/// Fits a least-squares predictor of `user`'s ratings from `feature`, trained
/// on `restaurants`, and returns it with its R².
///
/// # Errors
/// - [`Error::UnknownKey`] if the user has not reviewed one of `restaurants`.
/// - [`Error::EmptySequence`] if `restaurants` is empty.
/// - [`Error::DegenerateModel`] if the feature or the ratings do not vary.
pub fn find_predictor<R>(user: &User, restaurants: &[R], feature: Feature) -> Result<(Predictor, f64)>
where
    R: Borrow<Restaurant>,
{
    let xs = restaurants
        .iter()
        .map(|r| feature.extract(r.borrow()))
        .collect::<Result<Vec<f64>>>()?;
    let ys = restaurants
        .iter()
        .map(|r| user.rating(r.borrow().name()))
        .collect::<Result<Vec<f64>>>()?;

    let model = LinearRegression::fit(&xs, &ys)?;
    Ok((Predictor { feature, model }, model.r_squared))
}

/// Fits one predictor per feature over the restaurants `user` reviewed and
/// returns the one with the highest R². On equal R² the earlier feature wins.
///
/// # Errors
/// - [`Error::InsufficientData`] if the user reviewed none of `restaurants`,
///   or `features` is empty.
/// - [`Error::DegenerateModel`] if any feature gives a degenerate fit.
/// - Any other error from [`find_predictor`].
pub fn best_predictor<R>(user: &User, restaurants: &[R], features: &[Feature]) -> Result<Predictor>
where
    R: Borrow<Restaurant>,
{
    let reviewed: Vec<&Restaurant> = user
        .reviewed_restaurants(restaurants)
        .into_iter()
        .map(|r| r.borrow())
        .collect();
    if reviewed.is_empty() {
        return Err(Error::InsufficientData(format!(
            "{} has not reviewed any of the given restaurants",
            user.name()
        )));
    }

    let mut best: Option<(Predictor, f64)> = None;
    for &feature in features {
        let (predictor, r_squared) = find_predictor(user, &reviewed, feature)?;
        debug!("feature {} has R^2 = {r_squared:.4}", feature.name());
        match best {
            Some((_, best_r_squared)) if r_squared <= best_r_squared => {}
            _ => best = Some((predictor, r_squared)),
        }
    }

    let (predictor, r_squared) =
        best.ok_or_else(|| Error::InsufficientData("no candidate features".to_string()))?;
    debug!(
        "best predictor for {}: {} (R^2 = {r_squared:.4})",
        user.name(),
        predictor.feature.name()
    );
    Ok(predictor)
}

/// Rates every restaurant in `restaurants` for `user`: the user's own rating
/// where one exists, otherwise the estimate of the best predictor trained on
/// the user's reviews among `known`.
///
/// Restaurants sharing a name collapse into one entry; the later one wins.
pub fn rate_all<R, K>(
    user: &User,
    restaurants: &[R],
    known: &[K],
    features: &[Feature],
) -> Result<HashMap<String, f64>>
where
    R: Borrow<Restaurant>,
    K: Borrow<Restaurant>,
{
    let predictor = best_predictor(user, known, features)?;

    let mut ratings = HashMap::with_capacity(restaurants.len());
    for restaurant in restaurants {
        let restaurant = restaurant.borrow();
        let name = restaurant.name();
        let rating = if user.has_reviewed(name) {
            user.rating(name)?
        } else {
            predictor.predict(restaurant)?
        };
        ratings.insert(name.to_string(), rating);
    }
    Ok(ratings)
}

/// The restaurants with `query` among their categories, in their original order.
/// Matching is exact and case-sensitive.
pub fn search<'a, R>(query: &str, restaurants: &'a [R]) -> Vec<&'a R>
where
    R: Borrow<Restaurant>,
{
    restaurants
        .iter()
        .filter(|&r| r.borrow().has_category(query))
        .collect()
}
