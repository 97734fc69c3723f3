//! Point quadtree with adaptive subdivision and rectangular range queries.
//!
//! A node holds points directly until its capacity is reached, then splits
//! its boundary into four equal quadrants (NW, NE, SW, SE) and pushes
//! further points down into them. Range queries prune every subtree whose
//! extent does not intersect the query range, which is the performance win
//! over scanning a flat list.
//!
//! # Example
//!
//! ```
//! use quadrum::{Boundary, Point, QuadTree};
//!
//! let mut tree = QuadTree::new(Boundary::new(0.0, 0.0, 100.0, 100.0)).unwrap();
//! assert!(tree.insert(Point::with_data(10.0, 10.0, "a")));
//! assert!(tree.insert(Point::with_data(-20.0, 5.0, "b")));
//! assert!(!tree.insert(Point::with_data(80.0, 0.0, "outside")));
//!
//! let hits = tree.query(Boundary::new(0.0, 0.0, 50.0, 50.0));
//! assert_eq!(hits.len(), 2);
//! ```

use crate::bounds::Boundary;
use crate::error::QuadError;
use crate::point::Point;
use num_traits::Float;

/// Number of points a node holds directly before subdividing, unless
/// overridden with [`QuadTree::with_capacity`].
pub const DEFAULT_CAPACITY: usize = 4;

/// The four children of a subdivided node.
///
/// The quadrants exactly tile the parent boundary. Traversal order is
/// always NW, NE, SW, SE, which keeps tree shape and query output
/// deterministic for points sitting on shared quadrant edges.
#[derive(Debug, Clone)]
struct Quadrants<F, D> {
    north_west: QuadTree<F, D>,
    north_east: QuadTree<F, D>,
    south_west: QuadTree<F, D>,
    south_east: QuadTree<F, D>,
}

impl<F, D> Quadrants<F, D> {
    #[inline]
    fn each(&self) -> [&QuadTree<F, D>; 4] {
        [
            &self.north_west,
            &self.north_east,
            &self.south_west,
            &self.south_east,
        ]
    }

    #[inline]
    fn each_mut(&mut self) -> [&mut QuadTree<F, D>; 4] {
        [
            &mut self.north_west,
            &mut self.north_east,
            &mut self.south_west,
            &mut self.south_east,
        ]
    }
}

/// A point quadtree over a fixed boundary.
///
/// Stores points of type [`Point<F, D>`] where `D` is an opaque payload.
/// The root is the only entry point; children are owned exclusively by
/// their parent, so dropping the tree drops every node.
///
/// Points that overflow a full node are pushed into children, but points
/// already held by a node are never migrated down. The tree only grows;
/// there is no deletion or rebalancing.
///
/// # Complexity
///
/// - Insertion: O(log n) average for well-distributed points
/// - Range query: O(√n + k) typical, where k is the number of results
/// - Worst case degrades toward O(n) when points cluster in one quadrant
///
/// # Example
///
/// ```
/// use quadrum::{Boundary, Point, QuadTree};
///
/// // A 200x200 world centered on the origin, up to 4 points per node.
/// let mut tree = QuadTree::new(Boundary::new(0.0, 0.0, 200.0, 200.0)).unwrap();
///
/// for i in 0..32 {
///     let x = (i % 8) as f64 * 20.0 - 70.0;
///     let y = (i / 8) as f64 * 20.0 - 30.0;
///     assert!(tree.insert(Point::with_data(x, y, i)));
/// }
///
/// // Everything in the upper-right 100x100 viewport.
/// let visible = tree.query(Boundary::new(50.0, 50.0, 100.0, 100.0));
/// assert!(visible.iter().all(|p| p.x >= 0.0 && p.y >= 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct QuadTree<F, D = ()> {
    boundary: Boundary<F>,
    capacity: usize,
    points: Vec<Point<F, D>>,
    children: Option<Box<Quadrants<F, D>>>,
}

impl<F: Float, D> QuadTree<F, D> {
    /// Creates a tree over `boundary` with the default capacity of 4.
    ///
    /// # Errors
    ///
    /// Returns [`QuadError::DegenerateBoundary`] if the boundary's width or
    /// height is zero, negative, or non-finite.
    pub fn new(boundary: Boundary<F>) -> Result<Self, QuadError> {
        Self::with_capacity(boundary, DEFAULT_CAPACITY)
    }

    /// Creates a tree over `boundary` holding up to `capacity` points per
    /// node before subdividing.
    ///
    /// # Errors
    ///
    /// Returns [`QuadError::ZeroCapacity`] if `capacity` is 0, or
    /// [`QuadError::DegenerateBoundary`] if the boundary's width or height
    /// is zero, negative, or non-finite.
    pub fn with_capacity(boundary: Boundary<F>, capacity: usize) -> Result<Self, QuadError> {
        if capacity == 0 {
            return Err(QuadError::ZeroCapacity);
        }
        if !boundary.width.is_finite()
            || !boundary.height.is_finite()
            || boundary.width <= F::zero()
            || boundary.height <= F::zero()
        {
            return Err(QuadError::DegenerateBoundary);
        }
        Ok(Self::node(boundary, capacity))
    }

    /// Child constructor. Quadrant geometry is valid whenever the parent's
    /// is, so no revalidation.
    fn node(boundary: Boundary<F>, capacity: usize) -> Self {
        Self {
            boundary,
            capacity,
            points: Vec::new(),
            children: None,
        }
    }

    /// Returns the boundary this tree covers.
    #[inline]
    pub fn boundary(&self) -> Boundary<F> {
        self.boundary
    }

    /// Returns the per-node point capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` once this node has split into four quadrants.
    ///
    /// Subdivision happens at most once and is never undone.
    #[inline]
    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    /// Returns the total number of points stored in this subtree.
    pub fn len(&self) -> usize {
        let mut n = self.points.len();
        if let Some(quads) = self.children.as_deref() {
            for child in quads.each() {
                n += child.len();
            }
        }
        n
    }

    /// Returns `true` if no points are stored.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.children.is_none()
    }

    /// Inserts a point, returning `true` if it was stored anywhere in the
    /// tree.
    ///
    /// A point outside the tree's boundary is rejected with `false` and the
    /// tree is left untouched; the caller decides whether that is an error.
    /// Containment is inclusive on all edges, so a point exactly on the
    /// boundary is accepted.
    ///
    /// If this node is full the point is offered to the children in NW,
    /// NE, SW, SE order and stored by the first quadrant that contains it,
    /// subdividing first if needed. Points already held here stay here.
    pub fn insert(&mut self, point: Point<F, D>) -> bool {
        self.try_insert(point).is_ok()
    }

    /// Insertion that hands the point back on rejection, so parents can
    /// offer it to the next quadrant without cloning.
    fn try_insert(&mut self, point: Point<F, D>) -> Result<(), Point<F, D>> {
        if !self.boundary.contains(&point) {
            return Err(point);
        }
        if self.points.len() < self.capacity {
            self.points.push(point);
            return Ok(());
        }

        if self.children.is_none() {
            self.subdivide();
        }

        let mut point = point;
        if let Some(quads) = self.children.as_deref_mut() {
            for child in quads.each_mut() {
                match child.try_insert(point) {
                    Ok(()) => return Ok(()),
                    Err(rejected) => point = rejected,
                }
            }
        }

        // The quadrants tile this boundary exactly, so a point that passed
        // the containment test above must land in one of them. Only
        // floating-point rounding at a shared edge could reach this.
        debug_assert!(
            false,
            "point inside node boundary rejected by all four quadrants"
        );
        Err(point)
    }

    /// Splits the boundary into four equal quadrants and creates the
    /// children, each with this node's capacity.
    ///
    /// Runs at most once, on the first insert that overflows this node.
    /// Points already held here are not redistributed.
    fn subdivide(&mut self) {
        let Boundary {
            x,
            y,
            width,
            height,
        } = self.boundary;
        let two = F::one() + F::one();
        let (w, h) = (width / two, height / two);
        let (qw, qh) = (w / two, h / two);

        let capacity = self.capacity;
        let child = |cx: F, cy: F| Self::node(Boundary::new(cx, cy, w, h), capacity);

        self.children = Some(Box::new(Quadrants {
            north_west: child(x - qw, y + qh),
            north_east: child(x + qw, y + qh),
            south_west: child(x - qw, y - qh),
            south_east: child(x + qw, y - qh),
        }));
    }

    /// Returns all points inside `range`.
    ///
    /// Membership is half-open: lower edges of the range are inclusive,
    /// upper edges exclusive, on both axes. This is deliberately stricter
    /// than the inclusive test used at insertion, so a point stored exactly
    /// on a boundary's upper edge is not returned by a query using that
    /// same rectangle as its range (see [`Boundary::contains_half_open`]).
    ///
    /// Results are eagerly collected, each node's own points before its
    /// children's, children in NW, NE, SW, SE order, insertion order within
    /// a node. No sorting is applied and no point appears twice, since each
    /// stored point lives in exactly one node.
    pub fn query(&self, range: Boundary<F>) -> Vec<&Point<F, D>> {
        let mut found = Vec::new();
        self.query_into(range, &mut found);
        found
    }

    fn query_into<'a>(&'a self, range: Boundary<F>, found: &mut Vec<&'a Point<F, D>>) {
        if !self.boundary.intersects(range) {
            return;
        }
        for point in &self.points {
            if range.contains_half_open(point) {
                found.push(point);
            }
        }
        if let Some(quads) = self.children.as_deref() {
            for child in quads.each() {
                child.query_into(range, found);
            }
        }
    }

    /// Returns every stored point, depth-first, without range filtering.
    ///
    /// Unlike [`Self::query`] with the root boundary, this also yields
    /// points sitting exactly on the boundary's upper edges, which the
    /// half-open query rule would exclude.
    pub fn points(&self) -> Vec<&Point<F, D>> {
        let mut out = Vec::new();
        self.points_into(&mut out);
        out
    }

    fn points_into<'a>(&'a self, out: &mut Vec<&'a Point<F, D>>) {
        out.extend(self.points.iter());
        if let Some(quads) = self.children.as_deref() {
            for child in quads.each() {
                child.points_into(out);
            }
        }
    }
}
