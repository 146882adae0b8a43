//! Cross-validation and timing of Graham scan against Chan's algorithm.
//!
//! - `cross_check`: canonicalize both hulls and compare vertex for vertex.
//! - `time_hulls`, `time_chan_variants`: one stats row per input.
//! - `run_series`: rows for growing prefixes (or equal windows) of one
//!   seeded point cloud.

use std::time::Instant;

use crate::chan::{chan_hull, fast_chan_hull};
use crate::error::HullError;
use crate::geom2::Point;
use crate::graham::graham_scan;
use crate::hull::Hull;
use crate::points::random_points;

pub const CHAN: &str = "Chan";
pub const GRAHAM: &str = "Graham";
pub const NORMAL: &str = "Normal";
pub const FAST: &str = "Fast";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrossCheck {
    Match,
    SizeMismatch { graham: usize, chan: usize },
    VertexMismatch { index: usize, graham: Point, chan: Point },
}

impl CrossCheck {
    #[inline]
    pub fn is_match(&self) -> bool {
        matches!(self, CrossCheck::Match)
    }
}

/// Compare two hulls up to winding and start vertex.
pub fn cross_check(graham: &Hull, chan: &Hull) -> CrossCheck {
    if graham.len() != chan.len() {
        return CrossCheck::SizeMismatch {
            graham: graham.len(),
            chan: chan.len(),
        };
    }
    let (g, c) = (graham.canonical(), chan.canonical());
    g.vertices()
        .iter()
        .zip(c.vertices())
        .position(|(a, b)| a != b)
        .map_or(CrossCheck::Match, |index| CrossCheck::VertexMismatch {
            index,
            graham: g.vertices()[index],
            chan: c.vertices()[index],
        })
}

/// One timing row: `baseline_s` is the reference algorithm (Graham scan, or
/// the fast variant when comparing Chan variants).
#[derive(Clone, Debug, PartialEq)]
pub struct RunStats {
    pub n: usize,
    pub baseline_s: f64,
    pub chan_s: f64,
    pub winner: &'static str,
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed().as_secs_f64())
}

/// Time Chan (standard or fast) against Graham scan on the same input.
pub fn time_hulls(points: &[Point], fast: bool) -> Result<RunStats, HullError> {
    let (chan, chan_s) = timed(|| {
        if fast {
            fast_chan_hull(points)
        } else {
            chan_hull(points)
        }
    });
    let (graham, baseline_s) = timed(|| graham_scan(points));
    let check = cross_check(&graham?, &chan?);
    if !check.is_match() {
        tracing::warn!(n = points.len(), ?check, "hulls disagree");
    }
    Ok(RunStats {
        n: points.len(),
        baseline_s,
        chan_s,
        winner: if chan_s < baseline_s { CHAN } else { GRAHAM },
    })
}

/// Time the standard variant against the fast one.
pub fn time_chan_variants(points: &[Point]) -> Result<RunStats, HullError> {
    let (normal, chan_s) = timed(|| chan_hull(points));
    let (fast, baseline_s) = timed(|| fast_chan_hull(points));
    let (normal, fast) = (normal?, fast?);
    if normal != fast {
        tracing::warn!(n = points.len(), "chan variants disagree");
    }
    Ok(RunStats {
        n: points.len(),
        baseline_s,
        chan_s,
        winner: if chan_s < baseline_s { NORMAL } else { FAST },
    })
}

/// Series configuration.
#[derive(Clone, Copy, Debug)]
pub struct SeriesCfg {
    /// Points per step.
    pub low: usize,
    pub iterations: usize,
    /// Disjoint windows of `low` points instead of growing prefixes.
    pub same: bool,
    /// Use the fast variant against Graham scan.
    pub fast: bool,
    /// Compare the two Chan variants instead of Chan against Graham.
    pub compare_chan: bool,
    pub seed: u64,
}

impl Default for SeriesCfg {
    fn default() -> Self {
        Self {
            low: 10_000,
            iterations: 100,
            same: false,
            fast: false,
            compare_chan: false,
            seed: 0,
        }
    }
}

/// Generate `low * iterations` points once and time each step, handing rows
/// to `sink` as they are produced.
pub fn run_series(
    cfg: SeriesCfg,
    mut sink: impl FnMut(&RunStats),
) -> Result<Vec<RunStats>, HullError> {
    let all = random_points(cfg.low * cfg.iterations, cfg.seed);
    let mut rows = Vec::with_capacity(cfg.iterations);
    for i in 1..=cfg.iterations {
        let slice = if cfg.same {
            &all[cfg.low * (i - 1)..cfg.low * i]
        } else {
            &all[..cfg.low * i]
        };
        let row = if cfg.compare_chan {
            time_chan_variants(slice)?
        } else {
            time_hulls(slice, cfg.fast)?
        };
        sink(&row);
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::Winding;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn cross_check_reports_agreement_and_mismatches() {
        let input = pts(&[(0, 0), (4, 0), (4, 4), (0, 4), (2, 2)]);
        let g = graham_scan(&input).unwrap();
        let c = chan_hull(&input).unwrap();
        assert_eq!(cross_check(&g, &c), CrossCheck::Match);

        let tri = graham_scan(&pts(&[(0, 0), (4, 0), (4, 4)])).unwrap();
        assert_eq!(
            cross_check(&tri, &c),
            CrossCheck::SizeMismatch { graham: 3, chan: 4 }
        );

        let skewed = Hull::new(pts(&[(0, 0), (5, 0), (4, 4), (0, 4)]), Winding::CounterClockwise);
        let check = cross_check(&skewed, &c);
        assert_eq!(
            check,
            CrossCheck::VertexMismatch {
                index: 1,
                graham: Point::new(5, 0),
                chan: Point::new(4, 0)
            }
        );
        assert!(!check.is_match());
    }

    #[test]
    fn stats_rows_carry_labels() {
        let input = random_points(500, 3);
        let row = time_hulls(&input, false).unwrap();
        assert_eq!(row.n, 500);
        assert!(row.winner == CHAN || row.winner == GRAHAM);
        assert!(row.baseline_s >= 0.0 && row.chan_s >= 0.0);
        let row = time_chan_variants(&input).unwrap();
        assert!(row.winner == NORMAL || row.winner == FAST);
        assert!(time_hulls(&[], true).is_err());
    }

    #[test]
    fn series_prefixes_and_windows() {
        let mut seen = Vec::new();
        let cfg = SeriesCfg {
            low: 50,
            iterations: 3,
            seed: 5,
            ..SeriesCfg::default()
        };
        let rows = run_series(cfg, |r| seen.push(r.n)).unwrap();
        assert_eq!(seen, vec![50, 100, 150]);
        assert_eq!(rows.len(), 3);

        let same = SeriesCfg {
            same: true,
            compare_chan: true,
            ..cfg
        };
        let rows = run_series(same, |_| {}).unwrap();
        assert!(rows.iter().all(|r| r.n == 50));
    }
}
