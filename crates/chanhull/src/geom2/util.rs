use nalgebra::Vector2;
use std::cmp::Ordering;

use super::types::{Orientation, Point};

/// Coordinate order: lowest `y` first, ties by lowest `x`.
#[inline]
pub fn by_coordinate(a: &Point, b: &Point) -> Ordering {
    a.y.cmp(&b.y).then(a.x.cmp(&b.x))
}

/// The coordinate-minimal point (lowest, then leftmost); `None` for an empty slice.
#[inline]
pub fn lowest_point(points: &[Point]) -> Option<Point> {
    points.iter().min().copied()
}

#[inline]
pub(crate) fn cross(u: Vector2<i128>, v: Vector2<i128>) -> i128 {
    u.x * v.y - u.y * v.x
}

/// Twice the signed area of triangle `(a, b, c)`; positive for a left turn.
#[inline]
pub fn signed_area2(a: Point, b: Point, c: Point) -> i128 {
    cross(a.to(b), a.to(c))
}

/// Strict left turn (counter-clockwise).
#[inline]
pub fn left(a: Point, b: Point, c: Point) -> bool {
    signed_area2(a, b, c) > 0
}

/// Left turn or collinear.
#[inline]
pub fn left_on(a: Point, b: Point, c: Point) -> bool {
    signed_area2(a, b, c) >= 0
}

#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    match signed_area2(a, b, c).cmp(&0) {
        Ordering::Greater => Orientation::CounterClockwise,
        Ordering::Equal => Orientation::Collinear,
        Ordering::Less => Orientation::Clockwise,
    }
}

/// 0 when `v` lies in `[0, π)` counter-clockwise from `reference`, 1 otherwise.
#[inline]
fn half(reference: Vector2<i128>, v: Vector2<i128>) -> u8 {
    let c = cross(reference, v);
    if c > 0 || (c == 0 && reference.dot(&v) > 0) {
        0
    } else {
        1
    }
}

/// Compares the counter-clockwise sweeps, in `[0, 2π)`, from `reference` to `u`
/// and to `v`. The zero vector sorts before every direction.
pub(crate) fn cmp_sweep(reference: Vector2<i128>, u: Vector2<i128>, v: Vector2<i128>) -> Ordering {
    let zero = Vector2::zeros();
    match (u == zero, v == zero) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }
    half(reference, u)
        .cmp(&half(reference, v))
        .then_with(|| 0.cmp(&cross(u, v)))
}

/// Counter-clockwise polar order about `pivot`, starting at the +x axis.
/// `pivot` itself comes first; collinear points compare equal.
#[inline]
pub fn by_angle(pivot: Point, a: &Point, b: &Point) -> Ordering {
    cmp_sweep(Vector2::new(1, 0), pivot.to(*a), pivot.to(*b))
}

/// Polar angle of `p` about `pivot` in degrees, normalized to `[0, 360)`.
/// Reporting only; ordering decisions go through `by_angle`.
pub fn polar_angle_deg(pivot: Point, p: Point) -> f64 {
    if p == pivot {
        return 0.0;
    }
    let d = pivot.to(p);
    (d.y as f64).atan2(d.x as f64).to_degrees().rem_euclid(360.0)
}
