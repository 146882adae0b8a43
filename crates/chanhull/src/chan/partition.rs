use crate::error::HullError;
use crate::graham::graham_scan;
use crate::geom2::Point;
use crate::hull::Hull;

/// Group size `r = ⌈n/m⌉` for guess `m` (at least 1).
#[inline]
pub fn group_size(n: usize, guess: usize) -> usize {
    n.div_ceil(guess.max(1)).max(1)
}

/// Split `points` into consecutive groups of `r` (the last may be shorter)
/// and Graham-scan each.
pub fn partial_hulls(points: &[Point], r: usize) -> Result<Vec<Hull>, HullError> {
    if points.is_empty() {
        return Err(HullError::insufficient(0, 1));
    }
    points.chunks(r.max(1)).map(graham_scan).collect()
}
