//! Immutable 2D coordinate value.

use std::fmt;

use crate::Locatable;

/// A 2D coordinate with no identity beyond its `x` and `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point at `(x, y)`
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point or any [`Locatable`] entity.
    ///
    /// # Example
    /// ```
    /// use quadtree::Point;
    /// let origin = Point::new(0.0, 0.0);
    /// assert_eq!(origin.distance_to(&Point::new(3.0, 4.0)), 5.0);
    /// assert_eq!(origin.distance_to(&(6.0, 8.0)), 10.0);
    /// ```
    #[inline]
    pub fn distance_to<L: Locatable + ?Sized>(&self, item: &L) -> f64 {
        let (x, y) = item.xy();
        let (dx, dy) = (self.x - x, self.y - y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl Locatable for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
