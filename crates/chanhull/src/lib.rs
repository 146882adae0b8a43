//! Convex hulls of integer point sets: Graham scan and Chan's algorithm.
//!
//! Layout
//! - `geom2`: points, exact orientation predicates, angular frames.
//! - `graham`: Graham scan (also the per-group subroutine of Chan).
//! - `chan`: Chan's output-sensitive merge loop and its fast variant.
//! - `hull`: the `Hull` value and canonicalization.
//! - `compare`: Graham vs Chan cross-validation and timing rows.
//! - `points`: point sources (coordinate streams, text, seeded random).
//!
//! All geometric decisions are exact integer predicates; floating point only
//! appears in reported angles and timings.

pub mod chan;
pub mod compare;
pub mod geom2;
pub mod graham;
pub mod hull;
pub mod points;

mod error;

pub use error::HullError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::chan::{
        chan_hull, chan_hull_with, fast_chan_hull, ChanCfg, ChanOutcome, MergeObserver,
        NoopObserver, TangentSearch, Trace,
    };
    pub use crate::compare::{cross_check, CrossCheck, RunStats};
    pub use crate::geom2::{left, left_on, Coord, Point};
    pub use crate::graham::graham_scan;
    pub use crate::hull::{Hull, Winding};
    pub use crate::HullError;
}
