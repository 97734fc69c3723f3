//! 2D point with an attached payload.

use num_traits::Float;

/// A 2D point carrying caller-supplied data.
///
/// The payload type `D` is opaque to the tree: it is stored on insert and
/// handed back by queries, never inspected or mutated. It defaults to `()`
/// for payload-free use.
///
/// Points are immutable once inserted into a tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<F, D = ()> {
    pub x: F,
    pub y: F,
    /// Caller-supplied payload.
    pub data: D,
}

impl<F: Float> Point<F> {
    /// Creates a point with no payload.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y, data: () }
    }
}

impl<F: Float, D> Point<F, D> {
    /// Creates a point carrying a payload.
    #[inline]
    pub fn with_data(x: F, y: F, data: D) -> Self {
        Self { x, y, data }
    }
}
