//! Configuration and outcome types for the merge loop.

use crate::hull::Hull;

/// How a group hull is queried for its gift-wrap tangent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TangentSearch {
    /// Evaluate every vertex. O(k), cheapest for small groups.
    Linear,
    /// Partition-point search over the cyclically unimodal key sequence. O(log k).
    Binary,
}

/// Merge-loop configuration.
#[derive(Clone, Copy, Debug)]
pub struct ChanCfg {
    /// First hull-size guess; squared after each failed attempt. Values below 2 are raised to 2.
    pub initial_guess: usize,
    pub tangent: TangentSearch,
    /// Restart failed attempts from the union of the group hulls (fast variant).
    pub prune: bool,
}

impl Default for ChanCfg {
    fn default() -> Self {
        Self {
            initial_guess: 4,
            tangent: TangentSearch::Binary,
            prune: false,
        }
    }
}

impl ChanCfg {
    pub fn fast() -> Self {
        Self {
            prune: true,
            ..Self::default()
        }
    }
}

/// Bookkeeping for one guess of the merge loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attempt {
    pub guess: usize,
    pub group_size: usize,
    pub groups: usize,
    pub working_points: usize,
    pub closed: bool,
}

/// Hull plus the attempts that produced it (empty when the input was small
/// enough to answer directly).
#[derive(Clone, Debug)]
pub struct ChanOutcome {
    pub hull: Hull,
    pub attempts: Vec<Attempt>,
}

impl ChanOutcome {
    /// Guesses in the order they were tried.
    pub fn guesses(&self) -> Vec<usize> {
        self.attempts.iter().map(|a| a.guess).collect()
    }
}
