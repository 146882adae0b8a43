//! Gift-wrap reference frame.
//!
//! One `TurnFrame` is built per wrapping step from the two most recent hull
//! vertices `(llast, last)`. It ranks candidates by the counter-clockwise turn
//! from the direction `last → llast` to `last → p`, then by distance from
//! `last`; the maximum is the next hull vertex in clockwise order.

use nalgebra::Vector2;
use std::cmp::Ordering;

use super::types::Point;
use super::util::{cmp_sweep, cross};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnFrame {
    apex: Point,
    reference: Vector2<i128>,
}

impl TurnFrame {
    /// Frame at `last`, measured from the edge back to `llast`. On the first
    /// step (`llast == last`) the reference is the +x axis.
    pub fn new(llast: Point, last: Point) -> Self {
        let reference = if llast == last {
            Vector2::new(1, 0)
        } else {
            last.to(llast)
        };
        Self {
            apex: last,
            reference,
        }
    }

    #[inline]
    pub fn apex(&self) -> Point {
        self.apex
    }

    /// Gift-wrap order: turn angle, then distance from the apex. The apex
    /// itself ranks below every other point.
    #[inline]
    pub fn cmp(&self, a: &Point, b: &Point) -> Ordering {
        cmp_sweep(self.reference, self.apex.to(*a), self.apex.to(*b))
            .then_with(|| self.apex.dist2(*a).cmp(&self.apex.dist2(*b)))
    }

    /// Turn angle of `p` in degrees, `[0, 360)`; the apex reports 0.
    pub fn angle_deg(&self, p: Point) -> f64 {
        if p == self.apex {
            return 0.0;
        }
        let d = self.apex.to(p);
        let sweep = (cross(self.reference, d) as f64).atan2(self.reference.dot(&d) as f64);
        let deg = sweep.to_degrees().rem_euclid(360.0);
        if deg >= 360.0 {
            0.0
        } else {
            deg
        }
    }
}
