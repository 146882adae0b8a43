//! Integer 2D geometry: lattice points and exact predicates.
//!
//! Purpose
//! - Provide the `Point` value type and the orientation tests every hull
//!   algorithm in this crate decides with.
//! - Keep all geometric decisions exact: coordinates are `i32`, cross and dot
//!   products are evaluated in `i128`, so no tolerance is ever needed.
//!
//! Orderings
//! - `by_coordinate` (the `Ord` impl of `Point`): lowest `y`, then leftmost `x`.
//! - `by_angle`: counter-clockwise polar order about an explicit pivot.
//! - `TurnFrame`: gift-wrap order about the last hull vertex, measured from the
//!   previous hull edge.
//!
//!   Angles never live on the points themselves; every angular comparison takes
//!   its reference explicitly, so two phases cannot observe each other's frame.
//!
//! Code cross-refs: `graham::graham_scan`, `chan::tangent`

mod frame;
mod types;
mod util;

pub use frame::TurnFrame;
pub use types::{Coord, Orientation, Point};
pub use util::{
    by_angle, by_coordinate, left, left_on, lowest_point, orientation, polar_angle_deg,
    signed_area2,
};
