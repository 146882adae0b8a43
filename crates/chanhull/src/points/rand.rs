//! Seeded random point clouds.
//!
//! Model
//! - `n` points with coordinates uniform in `[-1000 n, 1000 n)`, clamped to
//!   the `Coord` range, so the expected hull size grows slowly with `n`.
//! - Determinism uses a replay token `(seed, index)` mixed into one `StdRng`;
//!   `random_points(n, seed)` is the token `(seed, 0)`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::{Coord, Point};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }

    /// Draw `n` points for this token.
    pub fn draw(self, n: usize) -> Vec<Point> {
        if n == 0 {
            return Vec::new();
        }
        let mut rng = self.to_std_rng();
        let high = (n as i64).saturating_mul(1000).min(Coord::MAX as i64) as Coord;
        (0..n)
            .map(|_| Point::new(rng.gen_range(-high..high), rng.gen_range(-high..high)))
            .collect()
    }
}

/// `n` random points for `seed`.
pub fn random_points(n: usize, seed: u64) -> Vec<Point> {
    ReplayToken { seed, index: 0 }.draw(n)
}
