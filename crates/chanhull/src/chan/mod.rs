//! Chan's output-sensitive convex hull.
//!
//! Purpose
//! - Compute the hull of n points in O(n log h) without knowing h: guess `m`,
//!   split the input into ⌈n/m⌉-sized groups, Graham-scan each group, then
//!   gift-wrap at most `m` steps, taking per step the best tangent over all
//!   group hulls. A failed guess is squared and the attempt restarted.
//! - The fast variant (`ChanCfg::prune`) restarts from the union of the
//!   failed attempt's group hulls: a point that is not a vertex of its own
//!   group hull can never be a vertex of the global one.
//!
//! Layout
//! - `types.rs` (config and outcome types), `partition.rs` (groups),
//!   `tangent.rs` (per-group tangent queries), `merge.rs` (outer loop),
//!   `observe.rs` (injected observer for partitions, steps and attempts).
//!
//! Output is clockwise, starting at the lowest (then leftmost) input point.
//!
//! Code cross-refs: `graham::graham_scan`, `geom2::TurnFrame`, `hull::Hull`

mod merge;
mod observe;
mod partition;
mod tangent;
mod types;

pub use merge::{chan_hull, chan_hull_with, fast_chan_hull};
pub use observe::{MergeObserver, NoopObserver, Step, Trace};
pub use partition::{group_size, partial_hulls};
pub use tangent::{find_tangent, tangent_index_binary, tangent_index_linear};
pub use types::{Attempt, ChanCfg, ChanOutcome, TangentSearch};

#[cfg(test)]
mod tests;
