//! Centered axis-aligned boundary used for node extents and query ranges.

use crate::point::Point;
use num_traits::Float;

/// An axis-aligned box described by its center and full extents.
///
/// `(x, y)` is the **center** and `width`/`height` are the **full** side
/// lengths, so the box spans `x ± width / 2` and `y ± height / 2`. This is
/// not a min/max-corner rectangle. The same convention applies to quadtree
/// node extents and to query ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary<F> {
    /// Center x coordinate.
    pub x: F,
    /// Center y coordinate.
    pub y: F,
    /// Full extent along x.
    pub width: F,
    /// Full extent along y.
    pub height: F,
}

impl<F: Float> Boundary<F> {
    /// Creates a boundary from its center and full extents.
    ///
    /// Does not validate the extents; tree construction rejects degenerate
    /// boundaries with [`QuadError::DegenerateBoundary`].
    ///
    /// [`QuadError::DegenerateBoundary`]: crate::QuadError::DegenerateBoundary
    #[inline]
    pub fn new(x: F, y: F, width: F, height: F) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half extent along x.
    #[inline]
    pub fn half_width(self) -> F {
        self.width / (F::one() + F::one())
    }

    /// Half extent along y.
    #[inline]
    pub fn half_height(self) -> F {
        self.height / (F::one() + F::one())
    }

    /// Smallest x coordinate covered by the box.
    #[inline]
    pub fn left(self) -> F {
        self.x - self.half_width()
    }

    /// Largest x coordinate covered by the box.
    #[inline]
    pub fn right(self) -> F {
        self.x + self.half_width()
    }

    /// Smallest y coordinate covered by the box.
    #[inline]
    pub fn bottom(self) -> F {
        self.y - self.half_height()
    }

    /// Largest y coordinate covered by the box.
    #[inline]
    pub fn top(self) -> F {
        self.y + self.half_height()
    }

    /// Returns the area of the box.
    #[inline]
    pub fn area(self) -> F {
        self.width * self.height
    }

    /// Returns `true` if the point lies inside this boundary.
    ///
    /// All four edges are inclusive: a point exactly on the shared edge of
    /// two sibling quadrants tests inside both. Insertion resolves the tie
    /// by offering the point to children in a fixed order.
    #[inline]
    pub fn contains<D>(self, point: &Point<F, D>) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.bottom()
            && point.y <= self.top()
    }

    /// Half-open membership test used for range queries.
    ///
    /// Lower edges are inclusive, upper edges exclusive, on both axes.
    /// This is stricter than [`Self::contains`]: a point sitting exactly on
    /// a range's upper edge is excluded from query results even though the
    /// inclusive test admitted it at insertion time.
    #[inline]
    pub fn contains_half_open<D>(self, point: &Point<F, D>) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.bottom()
            && point.y < self.top()
    }

    /// Returns `true` if two boxes overlap or touch.
    ///
    /// Separating-axis test on centered boxes. Merely-touching edges count
    /// as intersecting, matching the inclusive containment test.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        !(other.left() > self.right()
            || other.right() < self.left()
            || other.bottom() > self.top()
            || other.top() < self.bottom())
    }
}
