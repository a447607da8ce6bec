/// A point in the plane, e.g. a (latitude, longitude) pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Location) -> f64 {
        distance(*self, *other)
    }
}

impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Location {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// Anything that sits at a single [`Location`] and can therefore be clustered.
pub trait Located {
    fn location(&self) -> Location;
}

impl Located for Location {
    fn location(&self) -> Location {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> Location {
        (**self).location()
    }
}

/// Returns the Euclidean distance between `a` and `b`.
///
/// ```
/// use restaurant_maps::math::geometry::{distance, Location};
///
/// assert_eq!(distance(Location::new(1.0, 2.0), Location::new(4.0, 6.0)), 5.0);
/// ```
pub fn distance(a: Location, b: Location) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}
