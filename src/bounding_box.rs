//! Axis-aligned rectangle used for node bounds and range queries.

use std::fmt;

use crate::{Locatable, Point};

/// Axis-aligned rectangle between a top-left and a bottom-right corner.
///
/// Coordinates grow rightwards and downwards, so a well-formed box has
/// `top_left.x <= bottom_right.x` and `top_left.y <= bottom_right.y`.
/// Constructors do not normalize; see [`BoundingBox::is_valid`].
///
/// Both predicates are boundary-inclusive on every side.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    /// Corner with the smallest coordinates
    pub top_left: Point,
    /// Corner with the largest coordinates
    pub bottom_right: Point,
}

impl BoundingBox {
    /// Creates a box from its two corners
    #[inline]
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self { top_left, bottom_right }
    }

    /// Creates a box from raw corner coordinates.
    ///
    /// The caller passes `(x1, y1)` as the top-left corner and `(x2, y2)` as the
    /// bottom-right corner; nothing is swapped.
    ///
    /// # Example
    /// ```
    /// use quadtree::BoundingBox;
    /// let area = BoundingBox::create(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(area.width(), 100.0);
    /// assert_eq!(area.height(), 50.0);
    /// ```
    #[inline]
    pub const fn create(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Bounding box of the circle centered at `center` with the given `radius`
    #[inline]
    pub fn around<L: Locatable + ?Sized>(center: &L, radius: f64) -> Self {
        let (x, y) = center.xy();
        Self::create(x - radius, y - radius, x + radius, y + radius)
    }

    /// Left edge
    #[inline]
    pub const fn left(&self) -> f64 {
        self.top_left.x
    }

    /// Right edge
    #[inline]
    pub const fn right(&self) -> f64 {
        self.bottom_right.x
    }

    /// Top edge
    #[inline]
    pub const fn top(&self) -> f64 {
        self.top_left.y
    }

    /// Bottom edge
    #[inline]
    pub const fn bottom(&self) -> f64 {
        self.bottom_right.y
    }

    /// Horizontal extent
    #[inline]
    pub fn width(&self) -> f64 {
        self.right() - self.left()
    }

    /// Vertical extent
    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom() - self.top()
    }

    /// Midpoint of both axes
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.left() + self.right()) / 2.0,
            (self.top() + self.bottom()) / 2.0,
        )
    }

    /// Whether the corners are ordered as the geometry predicates expect.
    ///
    /// A box with NaN corners is never valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.left() <= self.right() && self.top() <= self.bottom()
    }

    /// Closed-interval containment test on both axes.
    ///
    /// # Example
    /// ```
    /// use quadtree::{BoundingBox, Point};
    /// let area = BoundingBox::create(0.0, 0.0, 10.0, 10.0);
    /// assert!(area.contains(&Point::new(10.0, 0.0)));
    /// assert!(!area.contains(&(10.5, 5.0)));
    /// ```
    #[inline]
    pub fn contains<L: Locatable + ?Sized>(&self, item: &L) -> bool {
        let (x, y) = item.xy();
        self.left() <= x && x <= self.right() && self.top() <= y && y <= self.bottom()
    }

    /// Closed-interval overlap test; boxes touching at an edge or corner overlap.
    ///
    /// Symmetric: `a.overlap(&b) == b.overlap(&a)`.
    #[inline]
    pub fn overlap(&self, other: &Self) -> bool {
        spans_overlap(self.left(), self.right(), other.left(), other.right())
            && spans_overlap(self.top(), self.bottom(), other.top(), other.bottom())
    }

    /// Splits the box at its midpoint into four quadrants.
    ///
    /// Order is top-left, top-right, bottom-right, bottom-left. Adjacent
    /// quadrants share their common edge.
    pub fn quadrants(&self) -> [Self; 4] {
        let (left, top) = (self.left(), self.top());
        let (right, bottom) = (self.right(), self.bottom());
        let mid = self.center();

        [
            Self::create(left, top, mid.x, mid.y),
            Self::create(mid.x, top, right, mid.y),
            Self::create(mid.x, mid.y, right, bottom),
            Self::create(left, mid.y, mid.x, bottom),
        ]
    }
}

#[inline]
fn spans_overlap(min_a: f64, max_a: f64, min_b: f64, max_b: f64) -> bool {
    min_a <= max_b && max_a >= min_b
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.top_left, self.bottom_right)
    }
}
