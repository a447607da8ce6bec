use crate::error::{Error, Result};
use crate::math::stats::mean;

/// A single-feature linear model `y = slope * x + intercept`, fitted by
/// ordinary least squares.
///
/// # Fields
/// - `slope`, `intercept`: the fitted line.
/// - `r_squared`: coefficient of determination on the training data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegression {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

impl LinearRegression {
    /// Fits the closed-form least-squares line through `(xs[i], ys[i])`.
    ///
    /// With `Sxx = Σ(x - x̄)²`, `Syy = Σ(y - ȳ)²` and `Sxy = Σ(x - x̄)(y - ȳ)`:
    /// `slope = Sxy / Sxx`, `intercept = ȳ - slope * x̄`, `R² = Sxy² / (Sxx * Syy)`.
    ///
    /// # Errors
    /// - [`Error::InsufficientData`] if `xs` and `ys` differ in length.
    /// - [`Error::EmptySequence`] if there are no samples.
    /// - [`Error::DegenerateModel`] if all `xs` or all `ys` are identical.
    ///
    /// # Example
    ///
    /// ```
    /// use restaurant_maps::ml::classic::LinearRegression;
    ///
    /// let xs = [0.0, 1.0, 2.0, 3.0];
    /// let ys = [2.0, 5.0, 8.0, 11.0];
    /// let model = LinearRegression::fit(&xs, &ys).unwrap();
    /// assert!((model.evaluate(4.0) - 14.0).abs() < 1e-9);
    /// assert!((model.r_squared - 1.0).abs() < 1e-9);
    /// ```
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Error::InsufficientData(format!(
                "{} feature values for {} ratings",
                xs.len(),
                ys.len()
            )));
        }
        let mean_x = mean(xs)?;
        let mean_y = mean(ys)?;

        let (sxx, syy, sxy) = xs.iter().zip(ys.iter()).fold(
            (0.0, 0.0, 0.0),
            |(sxx, syy, sxy), (&x, &y)| {
                let dx = x - mean_x;
                let dy = y - mean_y;
                (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
            },
        );

        if sxx == 0.0 {
            return Err(Error::DegenerateModel(
                "feature values have zero variance".to_string(),
            ));
        }
        if syy == 0.0 {
            return Err(Error::DegenerateModel(
                "ratings have zero variance".to_string(),
            ));
        }

        let slope = sxy / sxx;
        Ok(Self {
            slope,
            intercept: mean_y - slope * mean_x,
            r_squared: sxy * sxy / (sxx * syy),
        })
    }

    /// Predicted target for feature value `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
