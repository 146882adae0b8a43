use anyhow::{bail, Context, Result};
use chanhull::chan::{chan_hull_with, ChanCfg, ChanOutcome, TangentSearch, Trace};
use chanhull::compare::{cross_check, run_series, RunStats, SeriesCfg};
use chanhull::geom2::Point;
use chanhull::graham::graham_scan;
use chanhull::points::{parse_coordinates, random_points, require_points};
use clap::{Parser, Subcommand};
use polars::df;
use polars::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod manifest;

#[derive(Parser)]
#[command(name = "chanhull-cli")]
#[command(about = "Chan's convex hull: run, time against Graham scan, summarize")]
struct Cmd {
    /// Log debug events from the merge loop
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute one hull and cross-check it against Graham scan
    Hull {
        /// Number of random points (ignored with --input)
        #[arg(long, short, default_value_t = 100)]
        points: usize,
        /// Text file of whitespace-separated integer coordinates
        #[arg(long, short)]
        input: Option<String>,
        /// Prune interior points between attempts
        #[arg(long, short)]
        fast: bool,
        /// Linear tangent search instead of binary search
        #[arg(long)]
        linear: bool,
        /// Print every wrap step
        #[arg(long)]
        trace: bool,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Write the hull as JSON (plus a manifest sidecar)
        #[arg(long)]
        out: Option<String>,
    },
    /// Time Chan against Graham scan (or the two Chan variants) on growing inputs
    Stats {
        /// Use the fast variant against Graham scan
        #[arg(long, short)]
        fast: bool,
        /// Compare the fast and normal Chan variants instead
        #[arg(long, short)]
        compare: bool,
        /// Points per step
        #[arg(long, short, default_value_t = 10_000)]
        points: usize,
        /// Number of hulls to compute
        #[arg(long, short, default_value_t = 100)]
        number: usize,
        /// Same number of points for every hull
        #[arg(long, short)]
        same: bool,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Write the table as CSV (plus a manifest sidecar)
        #[arg(long)]
        out: Option<String>,
    },
    /// Mean times and win counts of a stats CSV
    Summarize {
        #[arg(long, short)]
        input: String,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(if cmd.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Hull {
            points,
            input,
            fast,
            linear,
            trace,
            seed,
            out,
        } => {
            let cfg = ChanCfg {
                tangent: if linear {
                    TangentSearch::Linear
                } else {
                    TangentSearch::Binary
                },
                prune: fast,
                ..ChanCfg::default()
            };
            hull(points, input, cfg, trace, seed, out)
        }
        Action::Stats {
            fast,
            compare,
            points,
            number,
            same,
            seed,
            out,
        } => {
            let cfg = SeriesCfg {
                low: points,
                iterations: number,
                same,
                fast,
                compare_chan: compare,
                seed,
            };
            stats(cfg, out)
        }
        Action::Summarize { input } => summarize(input),
    }
}

fn load_points(input: Option<&str>, n: usize, seed: u64) -> Result<Vec<Point>> {
    match input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading points from {path}"))?;
            let pts = parse_coordinates(&text);
            require_points(&pts, 4).context("need more than 3 points")?;
            Ok(pts)
        }
        None => Ok(random_points(n, seed)),
    }
}

#[derive(Serialize)]
struct HullReport {
    n: usize,
    fast: bool,
    hull: Vec<[i32; 2]>,
    attempts: Vec<AttemptRow>,
}

#[derive(Serialize)]
struct AttemptRow {
    guess: usize,
    group_size: usize,
    groups: usize,
    working_points: usize,
    closed: bool,
}

impl HullReport {
    fn new(n: usize, cfg: ChanCfg, outcome: &ChanOutcome) -> Self {
        Self {
            n,
            fast: cfg.prune,
            hull: outcome.hull.vertices().iter().map(|p| [p.x, p.y]).collect(),
            attempts: outcome
                .attempts
                .iter()
                .map(|a| AttemptRow {
                    guess: a.guess,
                    group_size: a.group_size,
                    groups: a.groups,
                    working_points: a.working_points,
                    closed: a.closed,
                })
                .collect(),
        }
    }
}

fn hull(
    n: usize,
    input: Option<String>,
    cfg: ChanCfg,
    print_trace: bool,
    seed: u64,
    out: Option<String>,
) -> Result<()> {
    let pts = load_points(input.as_deref(), n, seed)?;
    tracing::info!(points = pts.len(), fast = cfg.prune, tangent = ?cfg.tangent, "hull");

    let mut trace = Trace::default();
    let outcome = chan_hull_with(&pts, cfg, &mut trace)?;
    let graham = graham_scan(&pts)?;
    let check = cross_check(&graham, &outcome.hull);
    if !check.is_match() {
        bail!("Chan and Graham hulls disagree: {check:?}");
    }
    tracing::info!(
        vertices = outcome.hull.len(),
        attempts = outcome.attempts.len(),
        "hull closed"
    );

    if print_trace {
        for s in &trace.steps {
            println!("m={} {} -> {} ({:.3}°)", s.guess, s.from, s.to, s.angle_deg);
        }
    }
    println!("{}", outcome.hull);

    if let Some(out) = out {
        let out_path = Path::new(&out);
        create_parent(out_path)?;
        let report = HullReport::new(pts.len(), cfg, &outcome);
        std::fs::write(out_path, serde_json::to_vec_pretty(&report)?)
            .with_context(|| format!("writing {out}"))?;
        manifest::write_manifest(
            out_path,
            serde_json::json!({
                "command": "hull",
                "points": pts.len(),
                "input": input,
                "seed": seed,
                "fast": cfg.prune,
                "linear": cfg.tangent == TangentSearch::Linear,
            }),
        )?;
    }
    Ok(())
}

fn stats(cfg: SeriesCfg, out: Option<String>) -> Result<()> {
    tracing::info!(
        low = cfg.low,
        iterations = cfg.iterations,
        same = cfg.same,
        fast = cfg.fast,
        compare = cfg.compare_chan,
        "stats"
    );
    if cfg.compare_chan {
        println!("Number points, Fast Chan time, Normal Chan time, Faster alg");
    } else {
        println!("Number points, Graham time, Chan time, Faster alg");
    }
    let rows = run_series(cfg, |r| {
        println!("{}, {}, {}, {}", r.n, r.baseline_s, r.chan_s, r.winner);
    })?;

    if let Some(out) = out {
        let out_path = Path::new(&out);
        create_parent(out_path)?;
        write_stats_csv(out_path, &rows)?;
        manifest::write_manifest(
            out_path,
            serde_json::json!({
                "command": "stats",
                "points": cfg.low,
                "number": cfg.iterations,
                "same": cfg.same,
                "fast": cfg.fast,
                "compare": cfg.compare_chan,
                "seed": cfg.seed,
            }),
        )?;
    }
    Ok(())
}

fn write_stats_csv(path: &Path, rows: &[RunStats]) -> Result<()> {
    let mut df = df!(
        "n" => rows.iter().map(|r| r.n as u64).collect::<Vec<_>>(),
        "baseline_s" => rows.iter().map(|r| r.baseline_s).collect::<Vec<_>>(),
        "chan_s" => rows.iter().map(|r| r.chan_s).collect::<Vec<_>>(),
        "winner" => rows.iter().map(|r| r.winner).collect::<Vec<_>>(),
    )?;
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}

fn summarize(input: String) -> Result<()> {
    let df = LazyCsvReader::new(&input)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()?;
    tracing::info!(rows = df.height(), cols = df.width(), "stats_csv_shape");

    for name in ["baseline_s", "chan_s"] {
        let col = df.column(name)?.cast(&DataType::Float64)?;
        let mean = col.f64()?.mean().unwrap_or(f64::NAN);
        println!("mean {name}: {mean:.6}");
    }
    let mut wins: BTreeMap<String, usize> = BTreeMap::new();
    for w in df.column("winner")?.str()?.into_iter().flatten() {
        *wins.entry(w.to_string()).or_insert(0) += 1;
    }
    for (label, count) in &wins {
        println!("{label}: {count} wins");
    }
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
