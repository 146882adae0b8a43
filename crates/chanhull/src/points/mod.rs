//! Point sources: coordinate streams, text input and seeded random clouds.
//!
//! These are thin adapters feeding the hull algorithms; none of them makes a
//! geometric decision.

pub mod rand;

pub use self::rand::{random_points, ReplayToken};

use crate::error::HullError;
use crate::geom2::{Coord, Point};

/// Pair a flat coordinate stream into points; a trailing unpaired value is
/// dropped, as are pairs outside the `Coord` range.
pub fn from_coordinates(coords: &[i64]) -> Vec<Point> {
    coords
        .chunks_exact(2)
        .filter_map(|xy| {
            let x = Coord::try_from(xy[0]).ok()?;
            let y = Coord::try_from(xy[1]).ok()?;
            Some(Point::new(x, y))
        })
        .collect()
}

/// Integer tokens of `text` (whitespace separated; other tokens are skipped),
/// paired into points.
pub fn parse_coordinates(text: &str) -> Vec<Point> {
    let coords: Vec<i64> = text
        .split_whitespace()
        .filter_map(|tok| tok.parse::<i64>().ok())
        .collect();
    from_coordinates(&coords)
}

/// Caller policy: require at least `min` points.
pub fn require_points(points: &[Point], min: usize) -> Result<(), HullError> {
    if points.len() < min {
        return Err(HullError::insufficient(points.len(), min));
    }
    Ok(())
}
