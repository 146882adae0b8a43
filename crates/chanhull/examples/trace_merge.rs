//! Print every partition and wrap step of Chan's algorithm on a small cloud.
//!
//! Usage:
//!   cargo run -p chanhull --example trace_merge -- [points] [seed]
//!
//! Stands in for an animation: each attempt lists its group hulls, then the
//! edges the wrap adds, then whether the guess was large enough.

use chanhull::chan::{chan_hull_with, ChanCfg, Trace};
use chanhull::points::random_points;

fn main() {
    let mut args = std::env::args().skip(1);
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(40);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let pts = random_points(n, seed);

    let mut trace = Trace::default();
    let outcome = match chan_hull_with(&pts, ChanCfg::default(), &mut trace) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("error: {e}");
            return;
        }
    };
    for (guess, groups) in &trace.partitions {
        println!("guess m={guess}: {} groups", groups.len());
        for g in groups {
            println!("  group hull {g}");
        }
        for s in trace.steps_for(*guess) {
            println!("  wrap {} -> {} ({:.1}°)", s.from, s.to, s.angle_deg);
        }
    }
    for a in &outcome.attempts {
        println!(
            "m={} r={} groups={} n={} closed={}",
            a.guess, a.group_size, a.groups, a.working_points, a.closed
        );
    }
    println!("hull: {}", outcome.hull);
}
