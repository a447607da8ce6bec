use crate::error::{Error, Result};

/// Returns the arithmetic mean of `values`.
///
/// Accepts anything that widens losslessly into `f64`, so integer and float
/// slices both work.
///
/// # Errors
/// - [`Error::EmptySequence`] if `values` is empty.
///
/// # Example
///
/// ```
/// use restaurant_maps::math::stats::mean;
///
/// assert_eq!(mean(&[0, -3, 2, -1]).unwrap(), -0.5);
/// assert!(mean::<f64>(&[]).is_err());
/// ```
pub fn mean<T>(values: &[T]) -> Result<f64>
where
    T: Copy + Into<f64>,
{
    if values.is_empty() {
        return Err(Error::EmptySequence);
    }
    let sum: f64 = values.iter().map(|&v| v.into()).sum();
    Ok(sum / values.len() as f64)
}
