//! quadrum - a point quadtree for 2D range queries
//!
//! Stores 2D points with attached payloads and answers axis-aligned
//! rectangular "which points lie in this rectangle" queries by recursively
//! partitioning space, pruning subtrees that cannot contain a match. Useful
//! for collision detection, spatial clustering, and viewport culling when a
//! full spatial database is overkill.
//!
//! Boundaries use a center + full-extent convention throughout: a
//! [`Boundary`] is its center `(x, y)` plus its full `width` and `height`,
//! never min/max corners.
//!
//! # Example
//!
//! ```
//! use quadrum::{Boundary, Point, QuadTree};
//!
//! let world = Boundary::new(0.0, 0.0, 100.0, 100.0);
//! let mut tree = QuadTree::new(world).unwrap();
//!
//! tree.insert(Point::with_data(10.0, 10.0, "a"));
//! tree.insert(Point::with_data(-30.0, 25.0, "b"));
//! tree.insert(Point::with_data(40.0, -40.0, "c"));
//!
//! let near_origin = tree.query(Boundary::new(0.0, 0.0, 50.0, 50.0));
//! assert_eq!(near_origin.len(), 1);
//! assert_eq!(near_origin[0].data, "a");
//! ```

pub mod bounds;
pub mod error;
pub mod point;
pub mod tree;

pub use bounds::Boundary;
pub use error::QuadError;
pub use point::Point;
pub use tree::{QuadTree, DEFAULT_CAPACITY};
