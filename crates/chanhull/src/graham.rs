//! Graham scan: polar sort about the lowest point plus a stack sweep.
//!
//! Collinearity policy
//! - Ties in the polar sort are broken by distance from the pivot (nearest
//!   first) and exact duplicates are dropped.
//! - The sweep pops on anything but a strict left turn, so only strictly
//!   extreme vertices survive: collinear inputs collapse to their two end
//!   points, identical inputs to a single point.
//!
//! Used standalone and as the per-group subroutine of `chan`.

use crate::error::HullError;
use crate::geom2::{by_angle, left, lowest_point, Point};
use crate::hull::{Hull, Winding};

/// Convex hull in counter-clockwise order starting at the lowest (then
/// leftmost) point. O(k log k).
pub fn graham_scan(points: &[Point]) -> Result<Hull, HullError> {
    let pivot = lowest_point(points).ok_or(HullError::insufficient(0, 1))?;
    let mut sorted = points.to_vec();
    sorted.sort_unstable_by(|a, b| {
        by_angle(pivot, a, b).then_with(|| pivot.dist2(*a).cmp(&pivot.dist2(*b)))
    });
    sorted.dedup();

    let mut stack: Vec<Point> = Vec::with_capacity(sorted.len());
    for cur in sorted {
        while stack.len() >= 2 && !left(stack[stack.len() - 2], stack[stack.len() - 1], cur) {
            stack.pop();
        }
        stack.push(cur);
    }
    Ok(Hull::new(stack, Winding::CounterClockwise))
}
