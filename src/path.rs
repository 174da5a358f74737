//! Points and traced paths.
//!
//! A [`Path`] keeps every cell a trace walked through, one unit step at a
//! time. Its corners and closed flag are derived once, when the path is
//! sealed, and never change afterwards.

use std::fmt;

use crate::corners::reduce;

/// A grid coordinate: column `x` (after tab expansion) and row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Step vector from `self` to `other`.
    pub fn delta_to(self, other: Point) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }

    /// The point one step away by `(dx, dy)`.
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A traced polyline or polygon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    points: Vec<Point>,
    corners: Vec<Point>,
    closed: bool,
}

impl Path {
    /// Seal a traced point sequence.
    pub fn new(points: Vec<Point>) -> Self {
        let (corners, closed) = reduce(&points);
        Self {
            points,
            corners,
            closed,
        }
    }

    /// Every point walked, in trace order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Direction changes only; the first point is always kept.
    pub fn corners(&self) -> &[Point] {
        &self.corners
    }

    /// True when the trace comes back around to its first point.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Path{[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{p}")?;
        }
        f.write_str("]}")
    }
}
