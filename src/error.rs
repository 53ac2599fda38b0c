//! Error type for the reporting insertion path.

use thiserror::Error;

/// Reasons an item could not be stored.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum QuadTreeError {
    /// The coordinate lies outside the tree's root box.
    #[error("item at ({x}, {y}) lies outside the tree bounds")]
    OutOfBounds {
        /// Horizontal coordinate of the rejected item
        x: f64,
        /// Vertical coordinate of the rejected item
        y: f64,
    },

    /// An internal node contains the coordinate but none of its quadrants do.
    ///
    /// Only floating-point rounding at a split midpoint can cause this.
    #[error("no quadrant contains ({x}, {y}); split midpoint rounding")]
    Unroutable {
        /// Horizontal coordinate of the rejected item
        x: f64,
        /// Vertical coordinate of the rejected item
        y: f64,
    },
}

/// Result alias for fallible tree operations
pub type Result<T> = std::result::Result<T, QuadTreeError>;
