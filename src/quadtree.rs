//! Recursive quadtree over point-like entities.
//!
//! Each node is either a leaf holding items directly or an internal node
//! owning exactly four children that quarter its box. A leaf turns internal
//! once its [`QuadTreeConfig`] says so; the transition is permanent, so
//! removing items never merges children back. Trees under heavy churn keep
//! every node they ever created.
//!
//! Children are probed in top-left, top-right, bottom-right, bottom-left
//! order and the first one whose box contains the coordinate wins. A point on
//! a shared quadrant edge therefore always lands in the earliest quadrant.

use std::fmt;
use std::mem;

use log::{debug, error, trace};

use crate::error::{QuadTreeError, Result};
use crate::{BoundingBox, Locatable, Point, QuadTreeConfig};

/// Spatial index answering rectangle and circle queries over `T`.
///
/// Items are kept in insertion order inside their leaf and duplicates are
/// allowed; no equality over `T` is needed except by [`QuadTree::remove`],
/// [`QuadTree::take`] and the opt-in [`QuadTree::add_unique`].
///
/// # Example
/// ```
/// use quadtree::prelude::*;
///
/// let config = QuadTreeConfig::new().with_capacity(2);
/// let mut tree = QuadTree::with_config(BoundingBox::create(0.0, 0.0, 100.0, 100.0), config);
///
/// tree.add(Point::new(1.0, 1.0));
/// tree.add(Point::new(2.0, 2.0));
/// tree.add(Point::new(5.0, 5.0));
/// tree.add(Point::new(90.0, 90.0));
///
/// let found = tree.get(&BoundingBox::create(4.0, 4.0, 95.0, 95.0));
/// assert_eq!(found, vec![&Point::new(5.0, 5.0), &Point::new(90.0, 90.0)]);
/// ```
#[derive(Debug)]
pub struct QuadTree<T> {
    root: Node<T>,
    config: QuadTreeConfig<T>,
}

#[derive(Debug)]
struct Node<T> {
    bounds: BoundingBox,
    /// Always empty once `children` is set
    items: Vec<T>,
    /// Top-left, top-right, bottom-right, bottom-left
    children: Option<Box<[Node<T>; 4]>>,
    depth: usize,
}

impl<T> QuadTree<T> {
    /// Creates an empty tree over `bounds` with the default configuration
    pub fn new(bounds: BoundingBox) -> Self {
        Self::with_config(bounds, QuadTreeConfig::default())
    }

    /// Creates an empty tree over `bounds`
    ///
    /// # Arguments
    /// * `bounds` - Root box; items outside it are never stored
    /// * `config` - Split policy shared by every node
    pub fn with_config(bounds: BoundingBox, config: QuadTreeConfig<T>) -> Self {
        Self {
            root: Node::new(bounds, 0),
            config,
        }
    }

    /// Root box
    pub fn bounds(&self) -> BoundingBox {
        self.root.bounds
    }

    /// Split policy in use
    pub fn config(&self) -> &QuadTreeConfig<T> {
        &self.config
    }

    /// Whether the root has been split into quadrants
    pub fn is_split(&self) -> bool {
        self.root.children.is_some()
    }

    /// Depth of the deepest node; a tree that never split has depth 0
    pub fn depth(&self) -> usize {
        self.root.max_depth()
    }

    /// Number of nodes, internal and leaf
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether no item is stored
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Every stored item, leaf by leaf in top-left, top-right, bottom-right,
    /// bottom-left depth-first order.
    pub fn all(&self) -> Vec<&T> {
        let mut results = Vec::new();
        self.root.collect_all(&mut results);
        results
    }

    /// Deep copy of the whole tree with each item passed through `clone_item`.
    ///
    /// Boxes, item collections and child nodes are all fresh; the split
    /// predicate, if any, is shared by reference. Mutating either tree
    /// afterwards never affects the other.
    ///
    /// # Example
    /// ```
    /// use quadtree::prelude::*;
    ///
    /// let mut tree = QuadTree::new(BoundingBox::create(0.0, 0.0, 10.0, 10.0));
    /// tree.add(Point::new(1.0, 1.0));
    ///
    /// let mut snapshot = tree.copy(|p| *p);
    /// snapshot.add(Point::new(2.0, 2.0));
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(snapshot.len(), 2);
    /// ```
    pub fn copy<F>(&self, mut clone_item: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        Self {
            root: self.root.copy_with(&mut clone_item),
            config: self.config.clone(),
        }
    }
}

impl<T: Locatable> QuadTree<T> {
    /// Inserts an item, silently dropping it when it lies outside the root box.
    ///
    /// Use [`QuadTree::try_add`] to learn whether the item was stored.
    pub fn add(&mut self, item: T) {
        if let Err(err) = self.try_add(item) {
            report(&err);
        }
    }

    /// Inserts an item, reporting why it could not be stored.
    ///
    /// # Errors
    /// * [`QuadTreeError::OutOfBounds`] when the root box does not contain the item
    /// * [`QuadTreeError::Unroutable`] when a full leaf cannot split because its
    ///   quadrants would not contain the item or one of its stored items. This
    ///   only happens when the split midpoint is not a number (for instance a
    ///   root box with infinite extent). The leaf and its items are left as
    ///   they were.
    pub fn try_add(&mut self, item: T) -> Result<()> {
        if !self.root.bounds.contains(&item) {
            let (x, y) = item.xy();
            return Err(QuadTreeError::OutOfBounds { x, y });
        }

        self.root.insert(item, &self.config)
    }

    /// Appends every stored item overlapping `area` to `results`.
    ///
    /// `results` is not cleared, so one buffer can be reused across queries.
    ///
    /// # Arguments
    /// * `area` - Query rectangle, boundary-inclusive
    /// * `results` - Output vector; matching items are pushed onto it
    pub fn query<'a>(&'a self, area: &BoundingBox, results: &mut Vec<&'a T>) {
        self.root.query(area, results);
    }

    /// Items whose coordinate lies within `area` (edges included).
    pub fn get(&self, area: &BoundingBox) -> Vec<&T> {
        let mut results = Vec::new();
        self.query(area, &mut results);
        results
    }

    /// Items within Euclidean distance `radius` of `center`.
    ///
    /// Runs a box query over the circle's bounding box, then keeps the
    /// candidates that pass the exact distance test. A negative or NaN radius
    /// matches nothing.
    ///
    /// # Example
    /// ```
    /// use quadtree::prelude::*;
    ///
    /// let mut tree = QuadTree::new(BoundingBox::create(-10.0, -10.0, 10.0, 10.0));
    /// tree.add(Point::new(1.0, 1.0));
    /// tree.add(Point::new(2.0, 2.0));
    ///
    /// // (2, 2) is inside the bounding square but outside the circle
    /// let near = tree.get_in_circle(Point::new(0.0, 0.0), 2.0);
    /// assert_eq!(near, vec![&Point::new(1.0, 1.0)]);
    /// ```
    pub fn get_in_circle(&self, center: Point, radius: f64) -> Vec<&T> {
        if radius.is_nan() || radius < 0.0 {
            return Vec::new();
        }

        let mut candidates = Vec::new();
        self.query(&BoundingBox::around(&center, radius), &mut candidates);
        candidates.retain(|item| center.distance_to(*item) <= radius);
        candidates
    }
}

impl<T: Locatable + PartialEq> QuadTree<T> {
    /// Whether an item equal to `item` is stored at its coordinate
    pub fn contains(&self, item: &T) -> bool {
        self.root.find(item)
    }

    /// Inserts `item` unless an equal item is already stored at its coordinate.
    ///
    /// Returns whether the item was stored. Out-of-bounds items are dropped
    /// like [`QuadTree::add`] does.
    pub fn add_unique(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }

        match self.try_add(item) {
            Ok(()) => true,
            Err(err) => {
                report(&err);
                false
            }
        }
    }

    /// Removes one item equal to `item`; absent items are ignored.
    pub fn remove(&mut self, item: &T) {
        drop(self.take(item));
    }

    /// Removes and returns one item equal to `item`, if present.
    pub fn take(&mut self, item: &T) -> Option<T> {
        self.root.take(item)
    }
}

impl<T: Clone> Clone for QuadTree<T> {
    fn clone(&self) -> Self {
        self.copy(T::clone)
    }
}

/// Nested grouping of items by leaf, skipping empty leaves.
///
/// Meant for debugging; the layout is not a stable format.
impl<T: fmt::Display> fmt::Display for QuadTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

/// First quadrant, in routing order, containing `item`
fn quadrant_of<L: Locatable + ?Sized>(quadrants: &[BoundingBox; 4], item: &L) -> Option<usize> {
    quadrants.iter().position(|quadrant| quadrant.contains(item))
}

fn report(err: &QuadTreeError) {
    match err {
        QuadTreeError::OutOfBounds { .. } => debug!("dropping item: {err}"),
        QuadTreeError::Unroutable { .. } => error!("dropping item: {err}"),
    }
}

impl<T> Node<T> {
    fn new(bounds: BoundingBox, depth: usize) -> Self {
        Self {
            bounds,
            items: Vec::new(),
            children: None,
            depth,
        }
    }

    fn max_depth(&self) -> usize {
        match &self.children {
            None => self.depth,
            Some(children) => children.iter().map(Self::max_depth).max().unwrap_or(self.depth),
        }
    }

    fn node_count(&self) -> usize {
        match &self.children {
            None => 1,
            Some(children) => 1 + children.iter().map(Self::node_count).sum::<usize>(),
        }
    }

    fn len(&self) -> usize {
        match &self.children {
            None => self.items.len(),
            Some(children) => children.iter().map(Self::len).sum(),
        }
    }

    fn is_empty(&self) -> bool {
        match &self.children {
            None => self.items.is_empty(),
            Some(children) => children.iter().all(Self::is_empty),
        }
    }

    fn collect_all<'a>(&'a self, results: &mut Vec<&'a T>) {
        match &self.children {
            None => results.extend(self.items.iter()),
            Some(children) => {
                for child in children.iter() {
                    child.collect_all(results);
                }
            }
        }
    }

    fn copy_with<F>(&self, clone_item: &mut F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        Self {
            bounds: self.bounds,
            items: self.items.iter().map(|item| clone_item(item)).collect(),
            children: self
                .children
                .as_ref()
                .map(|children| Box::new(children.each_ref().map(|child| child.copy_with(clone_item)))),
            depth: self.depth,
        }
    }
}

impl<T: Locatable> Node<T> {
    /// Caller guarantees `self.bounds` contains `item`.
    fn insert(&mut self, item: T, config: &QuadTreeConfig<T>) -> Result<()> {
        if self.children.is_none() && config.should_split(&self.items, self.depth) {
            self.split(&item)?;
        }

        self.route(item, config)
    }

    fn route(&mut self, item: T, config: &QuadTreeConfig<T>) -> Result<()> {
        let Some(children) = &mut self.children else {
            self.items.push(item);
            return Ok(());
        };

        match children.iter_mut().find(|child| child.bounds.contains(&item)) {
            Some(child) => child.insert(item, config),
            None => {
                let (x, y) = item.xy();
                Err(QuadTreeError::Unroutable { x, y })
            }
        }
    }

    /// Turns the leaf into an internal node and hands its items to the new
    /// quadrants.
    ///
    /// Nothing changes unless every stored item and `incoming` fit some
    /// quadrant; the leaf then keeps its items and `incoming` is reported.
    fn split(&mut self, incoming: &T) -> Result<()> {
        let quadrants = self.bounds.quadrants();
        let slots = self
            .items
            .iter()
            .map(|item| quadrant_of(&quadrants, item))
            .collect::<Option<Vec<usize>>>()
            .filter(|_| quadrant_of(&quadrants, incoming).is_some());

        let Some(slots) = slots else {
            let (x, y) = incoming.xy();
            return Err(QuadTreeError::Unroutable { x, y });
        };

        trace!(
            "splitting node {} at depth {} holding {} items",
            self.bounds,
            self.depth,
            self.items.len()
        );

        let depth = self.depth + 1;
        let mut children = Box::new(quadrants.map(|bounds| Self::new(bounds, depth)));
        for (item, slot) in mem::take(&mut self.items).into_iter().zip(slots) {
            children[slot].items.push(item);
        }
        self.children = Some(children);
        Ok(())
    }

    fn query<'a>(&'a self, area: &BoundingBox, results: &mut Vec<&'a T>) {
        if !self.bounds.overlap(area) {
            return;
        }

        match &self.children {
            None => results.extend(self.items.iter().filter(|item| area.contains(*item))),
            Some(children) => {
                for child in children.iter() {
                    child.query(area, results);
                }
            }
        }
    }
}

impl<T: Locatable + PartialEq> Node<T> {
    fn find(&self, item: &T) -> bool {
        if !self.bounds.contains(item) {
            return false;
        }

        match &self.children {
            None => self.items.contains(item),
            Some(children) => children.iter().any(|child| child.find(item)),
        }
    }

    fn take(&mut self, item: &T) -> Option<T> {
        if !self.bounds.contains(item) {
            return None;
        }

        match &mut self.children {
            None => {
                let index = self.items.iter().position(|stored| stored == item)?;
                Some(self.items.remove(index))
            }
            Some(children) => children.iter_mut().find_map(|child| child.take(item)),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        match &self.children {
            None => {
                for (i, item) in self.items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
            }
            Some(children) => {
                let filled = children.iter().filter(|child| !child.is_empty());
                for (i, child) in filled.enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{child}")?;
                }
            }
        }
        f.write_str("}")
    }
}
