//! # Quadtree - Recursive 2D Spatial Index
//!
//! A Rust library providing a recursive quadtree over point-like entities,
//! answering "what lies inside this rectangle / circle" without scanning
//! every item.
//!
//! ## Features
//!
//! - **Generic Items**: Anything implementing [`Locatable`] can be stored
//! - **Range Queries**: Boundary-inclusive rectangle queries with subtree pruning
//! - **Circle Queries**: Broad-phase box query followed by an exact distance test
//! - **Dynamic**: Items can be added and removed at any time, no build step
//! - **Configurable Splitting**: Capacity, depth limit, or a custom predicate
//! - **Snapshots**: Deep copies that share no mutable state with the source
//!
//! ## Quick Start
//!
//! ```rust
//! use quadtree::prelude::*;
//!
//! // Create an index over a 100x100 area (top-left, bottom-right)
//! let mut tree = QuadTree::new(BoundingBox::create(0.0, 0.0, 100.0, 100.0));
//!
//! tree.add(Point::new(10.0, 10.0));
//! tree.add(Point::new(12.0, 11.0));
//! tree.add(Point::new(80.0, 75.0));
//! tree.add(Point::new(150.0, 20.0)); // outside the area, silently dropped
//!
//! // Query a rectangular region
//! let found = tree.get(&BoundingBox::create(0.0, 0.0, 20.0, 20.0));
//! assert_eq!(found.len(), 2);
//!
//! // Query a circular region
//! let near = tree.get_in_circle(Point::new(80.0, 80.0), 6.0);
//! assert_eq!(near, vec![&Point::new(80.0, 75.0)]);
//!
//! tree.remove(&Point::new(10.0, 10.0));
//! assert_eq!(tree.len(), 2);
//! ```
//!
//! ## How It Works
//!
//! Every node covers a box. A leaf stores items until its configured split
//! trigger fires, then becomes an internal node with four children that quarter
//! its box at the midpoint, and hands its items down to them. Queries skip any
//! subtree whose box does not overlap the query region.
//!
//! Splitting is permanent and the tree never rebalances. Many items sharing one
//! coordinate can split forever unless [`QuadTreeConfig::with_max_depth`] or a
//! split predicate bounds it. The tree is not synchronized; share it across
//! threads only behind external locking, or hand out [`QuadTree::copy`]
//! snapshots.

pub mod bounding_box;
pub mod config;
pub mod error;
pub mod locatable;
pub mod point;
pub mod prelude;
pub mod quadtree;

mod comparison_tests;

pub use bounding_box::BoundingBox;
pub use config::{DEFAULT_CAPACITY, QuadTreeConfig, SplitPredicate};
pub use error::{QuadTreeError, Result};
pub use locatable::Locatable;
pub use point::Point;
pub use quadtree::QuadTree;
