//! Outer loop: guess, partition, wrap, retry.

use std::borrow::Cow;
use std::cmp::Ordering;

use super::observe::{MergeObserver, NoopObserver};
use super::partition::{group_size, partial_hulls};
use super::tangent::find_tangent;
use super::types::{Attempt, ChanCfg, ChanOutcome, TangentSearch};
use crate::error::HullError;
use crate::geom2::{lowest_point, Point, TurnFrame};
use crate::graham::graham_scan;
use crate::hull::{Hull, Winding};

/// Chan's algorithm with the default configuration.
pub fn chan_hull(points: &[Point]) -> Result<Hull, HullError> {
    Ok(chan_hull_with(points, ChanCfg::default(), &mut NoopObserver)?.hull)
}

/// Chan's algorithm, pruning interior points between attempts.
pub fn fast_chan_hull(points: &[Point]) -> Result<Hull, HullError> {
    Ok(chan_hull_with(points, ChanCfg::fast(), &mut NoopObserver)?.hull)
}

/// Chan's algorithm with explicit configuration and observer.
///
/// Inputs of at most three points are answered by Graham scan directly and
/// report no attempts. The hull is clockwise from the lowest (then leftmost)
/// point.
pub fn chan_hull_with<O>(
    points: &[Point],
    cfg: ChanCfg,
    observer: &mut O,
) -> Result<ChanOutcome, HullError>
where
    O: MergeObserver + ?Sized,
{
    let v_low = lowest_point(points).ok_or(HullError::insufficient(0, 1))?;
    if points.len() <= 3 {
        return Ok(ChanOutcome {
            hull: graham_scan(points)?.reversed(),
            attempts: Vec::new(),
        });
    }

    let mut working: Cow<'_, [Point]> = Cow::Borrowed(points);
    let mut guess = cfg.initial_guess.max(2);
    let mut attempts = Vec::new();
    loop {
        let n = working.len();
        let r = group_size(n, guess);
        let groups = partial_hulls(&working, r)?;
        observer.on_partition(guess, &groups);

        let wrapped = wrap(&groups, v_low, guess, cfg.tangent, observer);
        let attempt = Attempt {
            guess,
            group_size: r,
            groups: groups.len(),
            working_points: n,
            closed: wrapped.is_some(),
        };
        observer.on_attempt(&attempt);
        attempts.push(attempt);

        if let Some(vertices) = wrapped {
            return Ok(ChanOutcome {
                hull: Hull::new(vertices, Winding::Clockwise),
                attempts,
            });
        }
        tracing::debug!(guess, group_size = r, working_points = n, "guess too small");

        if cfg.prune {
            working = Cow::Owned(groups.into_iter().flat_map(Hull::into_vertices).collect());
        }
        // Capped at the working size, where `m >= h` and the next attempt closes.
        guess = guess.saturating_mul(guess).min(working.len());
    }
}

/// Up to `steps` gift-wrap steps from `v_low`; `None` if the hull did not close.
fn wrap<O>(
    groups: &[Hull],
    v_low: Point,
    steps: usize,
    search: TangentSearch,
    observer: &mut O,
) -> Option<Vec<Point>>
where
    O: MergeObserver + ?Sized,
{
    let mut c_hull = vec![v_low];
    for _ in 0..steps {
        let last = c_hull[c_hull.len() - 1];
        let llast = if c_hull.len() >= 2 {
            c_hull[c_hull.len() - 2]
        } else {
            last
        };
        let frame = TurnFrame::new(llast, last);
        let next = groups
            .iter()
            .filter_map(|g| find_tangent(g.vertices(), &frame, search))
            .reduce(|best, p| {
                if frame.cmp(&p, &best) == Ordering::Greater {
                    p
                } else {
                    best
                }
            })?;
        let angle_deg = frame.angle_deg(next);
        observer.on_step(last, next, angle_deg);
        tracing::trace!(%last, %next, angle_deg, "wrap step");
        if next == v_low {
            return Some(c_hull);
        }
        c_hull.push(next);
    }
    None
}
