//! Observer hooks for the merge loop.
//!
//! The loop reports what it does through an injected `MergeObserver`; all
//! methods default to no-ops. `Trace` records everything, which is what
//! tests and the CLI's step printout use.

use super::types::Attempt;
use crate::geom2::Point;
use crate::hull::Hull;

pub trait MergeObserver {
    /// Group hulls built for guess `guess`.
    fn on_partition(&mut self, _guess: usize, _groups: &[Hull]) {}
    /// One gift-wrap step from `from` to the chosen tangent `to`.
    fn on_step(&mut self, _from: Point, _to: Point, _angle_deg: f64) {}
    /// End of an attempt, closed or not.
    fn on_attempt(&mut self, _attempt: &Attempt) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl MergeObserver for NoopObserver {}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub guess: usize,
    pub from: Point,
    pub to: Point,
    pub angle_deg: f64,
}

/// Recording observer.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    pub partitions: Vec<(usize, Vec<Hull>)>,
    pub steps: Vec<Step>,
    pub attempts: Vec<Attempt>,
}

impl Trace {
    /// Steps taken under guess `guess`.
    pub fn steps_for(&self, guess: usize) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(move |s| s.guess == guess)
    }
}

impl MergeObserver for Trace {
    fn on_partition(&mut self, guess: usize, groups: &[Hull]) {
        self.partitions.push((guess, groups.to_vec()));
    }

    fn on_step(&mut self, from: Point, to: Point, angle_deg: f64) {
        let guess = self.partitions.last().map_or(0, |(g, _)| *g);
        self.steps.push(Step {
            guess,
            from,
            to,
            angle_deg,
        });
    }

    fn on_attempt(&mut self, attempt: &Attempt) {
        self.attempts.push(*attempt);
    }
}
