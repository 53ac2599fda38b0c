//! Split configuration shared by every node of a tree.

use std::fmt;
use std::sync::Arc;

/// Default number of items a leaf holds before it splits
pub const DEFAULT_CAPACITY: usize = 20;

/// Custom split trigger evaluated over a leaf's current items
pub type SplitPredicate<T> = Arc<dyn Fn(&[T]) -> bool + Send + Sync>;

/// Controls when a leaf turns into an internal node.
///
/// By default a leaf splits once it already holds [`DEFAULT_CAPACITY`] items
/// and another one arrives. A split predicate replaces that count check, and
/// `max_depth` overrides both: a leaf at that depth never splits and grows
/// without bound.
///
/// Without `max_depth`, inserting more than `capacity` items at one coordinate
/// splits forever. Set a depth limit (or a predicate that gives up) whenever
/// coincident items are possible.
///
/// # Example
/// ```
/// use quadtree::QuadTreeConfig;
///
/// let config: QuadTreeConfig<(f64, f64)> = QuadTreeConfig::default()
///     .with_capacity(8)
///     .with_max_depth(6);
/// assert_eq!(config.capacity(), 8);
/// assert_eq!(config.max_depth(), Some(6));
/// ```
pub struct QuadTreeConfig<T> {
    capacity: usize,
    max_depth: Option<usize>,
    split_predicate: Option<SplitPredicate<T>>,
}

impl<T> QuadTreeConfig<T> {
    /// Creates the default configuration
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_depth: None,
            split_predicate: None,
        }
    }

    /// Sets the item count that triggers a split; 0 is treated as 1
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the depth at which nodes stop splitting (the root is depth 0)
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Replaces the count-based trigger with a custom predicate.
    ///
    /// # Example
    /// ```
    /// use quadtree::QuadTreeConfig;
    ///
    /// // split busy leaves, but only when their items are spread out
    /// let config = QuadTreeConfig::<(f64, f64)>::new().with_split_predicate(|items| {
    ///     items.len() > 4 && items.iter().any(|p| *p != items[0])
    /// });
    ///
    /// let spread = [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)];
    /// assert!(config.should_split(&spread, 0));
    /// assert!(!config.should_split(&[(0.0, 0.0); 9], 0));
    /// ```
    #[must_use]
    pub fn with_split_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&[T]) -> bool + Send + Sync + 'static,
    {
        self.split_predicate = Some(Arc::new(predicate));
        self
    }

    /// Split trigger item count
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Depth limit, if any
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Whether a custom split predicate is installed
    pub fn has_split_predicate(&self) -> bool {
        self.split_predicate.is_some()
    }

    /// Decides whether a leaf at `depth` holding `items` must split before
    /// accepting another item.
    ///
    /// An empty leaf never splits, whatever the capacity or predicate says, so
    /// a capacity of 0 behaves like 1 and a predicate that is `true` for an
    /// empty slice cannot subdivide a single item forever.
    pub fn should_split(&self, items: &[T], depth: usize) -> bool {
        if items.is_empty() || self.max_depth.is_some_and(|max| depth >= max) {
            return false;
        }

        match &self.split_predicate {
            Some(predicate) => predicate(items),
            None => items.len() >= self.capacity,
        }
    }
}

impl<T> Default for QuadTreeConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for QuadTreeConfig<T> {
    fn clone(&self) -> Self {
        Self {
            capacity: self.capacity,
            max_depth: self.max_depth,
            split_predicate: self.split_predicate.clone(),
        }
    }
}

impl<T> fmt::Debug for QuadTreeConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadTreeConfig")
            .field("capacity", &self.capacity)
            .field("max_depth", &self.max_depth)
            .field("split_predicate", &self.split_predicate.is_some())
            .finish()
    }
}
