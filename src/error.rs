//! Error types for quadrum operations.

use thiserror::Error;

/// Errors that can occur when constructing a quadtree.
///
/// Insertion and queries never fail; rejection of a point outside the tree
/// is reported through `insert`'s boolean return instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadError {
    /// Node capacity must allow at least one directly-held point.
    ///
    /// A zero capacity would force subdivision on every insert and the
    /// tree would recurse forever.
    #[error("node capacity must be at least 1")]
    ZeroCapacity,

    /// Boundary extents must be positive and finite.
    ///
    /// A zero or negative extent makes containment always false; a
    /// non-finite extent breaks quadrant arithmetic.
    #[error("degenerate boundary: width and height must be positive and finite")]
    DegenerateBoundary,
}
