//! Coordinate capability shared by everything the tree can index.

use crate::Point;

/// Anything that exposes a 2D coordinate.
///
/// The tree only ever reads `x` and `y`; it never inspects any other part of
/// the stored entity.
///
/// # Example
/// ```
/// use quadtree::Locatable;
///
/// struct Ship {
///     name: &'static str,
///     pos: (f64, f64),
/// }
///
/// impl Locatable for Ship {
///     fn x(&self) -> f64 {
///         self.pos.0
///     }
///     fn y(&self) -> f64 {
///         self.pos.1
///     }
/// }
///
/// let ship = Ship { name: "vega", pos: (3.0, 4.0) };
/// assert_eq!(ship.xy(), (3.0, 4.0));
/// assert_eq!(ship.name, "vega");
/// ```
pub trait Locatable {
    /// Horizontal coordinate
    fn x(&self) -> f64;

    /// Vertical coordinate
    fn y(&self) -> f64;

    /// Both coordinates as a tuple
    #[inline]
    fn xy(&self) -> (f64, f64) {
        (self.x(), self.y())
    }

    /// The coordinate as a [`Point`] value
    #[inline]
    fn to_point(&self) -> Point {
        Point::new(self.x(), self.y())
    }
}

impl Locatable for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl<L: Locatable + ?Sized> Locatable for &L {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }
}
