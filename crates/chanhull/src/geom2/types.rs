//! Lattice point and orientation types.
//!
//! - `Point`: immutable `(x, y)` with coordinate-only identity.
//! - `Orientation`: sign of the signed area of an ordered triple.

use nalgebra::Vector2;
use std::cmp::Ordering;
use std::fmt;

use super::util::by_coordinate;

/// Coordinate scalar. Differences fit in 33 bits and their products in 66,
/// which is why predicates widen to `i128`.
pub type Coord = i32;

/// Immutable 2D integer point.
///
/// `Ord` is the coordinate order (lowest `y`, then leftmost `x`); angular
/// orders are separate functions taking their pivot explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    #[inline]
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Exact direction `other - self`.
    #[inline]
    pub fn to(self, other: Point) -> Vector2<i128> {
        Vector2::new(
            other.x as i128 - self.x as i128,
            other.y as i128 - self.y as i128,
        )
    }

    /// Squared Euclidean distance, exact.
    #[inline]
    pub fn dist2(self, other: Point) -> i128 {
        let d = self.to(other);
        d.dot(&d)
    }
}

impl Ord for Point {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        by_coordinate(self, other)
    }
}

impl PartialOrd for Point {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(Coord, Coord)> for Point {
    #[inline]
    fn from((x, y): (Coord, Coord)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Turn direction of an ordered triple `(a, b, c)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}
