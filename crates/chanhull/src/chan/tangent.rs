//! Gift-wrap tangent of one group hull.
//!
//! Seen from the frame's apex (a vertex of the global hull), the wrap keys of
//! a strictly convex polygon's vertices form a cyclically unimodal sequence
//! with distinct values: one run climbs to the maximum, one falls to the
//! minimum. The apex itself, when it belongs to the polygon, is the minimum.
//! Distinct keys need a strictly convex, duplicate-free polygon, which is what
//! `graham_scan` returns.

use std::cmp::Ordering;

use super::types::TangentSearch;
use crate::geom2::{Point, TurnFrame};

/// Index of the best vertex by a full scan; the first of equal keys wins.
pub fn tangent_index_linear(hull: &[Point], frame: &TurnFrame) -> Option<usize> {
    let mut best = 0;
    for i in 1..hull.len() {
        if frame.cmp(&hull[i], &hull[best]) == Ordering::Greater {
            best = i;
        }
    }
    (!hull.is_empty()).then_some(best)
}

/// Index of the best vertex in O(log k) key evaluations.
///
/// With `a[i]` the key of vertex `i` (indices cyclic) and `k` the maximum:
/// - if `a[0] < a[1]`, `a` climbs from 0 to `k`, and every later index either
///   descends or sits below `a[0]`; `k` is the first index failing
///   "ascending and not below `a[0]`".
/// - if `a[0] > a[1]` and `a[0] > a[n-1]`, `a[0]` is the maximum.
/// - otherwise `a` falls to the minimum, climbs above `a[0]` to `k`, and from
///   `k` on descends while staying above `a[0]`; `k` is the first index
///   satisfying "above `a[0]` and descending".
pub fn tangent_index_binary(hull: &[Point], frame: &TurnFrame) -> Option<usize> {
    let n = hull.len();
    if n < 3 {
        return tangent_index_linear(hull, frame);
    }
    let above = |i: usize, j: usize| frame.cmp(&hull[i % n], &hull[j % n]) == Ordering::Greater;
    let ascending = |i: usize| above(i + 1, i);

    if ascending(0) {
        Some(partition_point(n, |i| ascending(i) && !above(0, i)))
    } else if above(0, n - 1) {
        Some(0)
    } else {
        Some(partition_point(n, |i| !(above(i, 0) && !ascending(i))))
    }
}

/// First index in `0..n` where `pred` turns false; `pred` must be monotone
/// (true then false).
fn partition_point(n: usize, mut pred: impl FnMut(usize) -> bool) -> usize {
    let mut lo = 0usize;
    let mut hi = n;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Tangent vertex of `hull` for this wrap step; `None` only for an empty slice.
#[inline]
pub fn find_tangent(hull: &[Point], frame: &TurnFrame, search: TangentSearch) -> Option<Point> {
    let idx = match search {
        TangentSearch::Linear => tangent_index_linear(hull, frame),
        TangentSearch::Binary => tangent_index_binary(hull, frame),
    }?;
    Some(hull[idx])
}
