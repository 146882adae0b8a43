use super::*;
use crate::geom2::{Point, TurnFrame};
use crate::graham::graham_scan;
use crate::hull::{Hull, Winding};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

/// `h` vertices on the parabola y = x² plus `interior` points strictly inside.
fn parabola_cloud(h: i32, interior: usize, seed: u64) -> Vec<Point> {
    let half = h / 2;
    let mut out: Vec<Point> = (-half..h - half).map(|x| Point::new(x, x * x)).collect();
    // above the parabola on |x| <= span, below the closing chord y = half² - half - x
    let mut rng = StdRng::seed_from_u64(seed);
    let span = half - 5;
    for _ in 0..interior {
        let x = rng.gen_range(-span..=span);
        let y = rng.gen_range(span * span + 1..=half * half - 2 * half + 4);
        out.push(Point::new(x, y));
    }
    out
}

fn wrap_frames(global: &[Point]) -> Vec<TurnFrame> {
    let cw = graham_scan(global).unwrap().reversed();
    let v = cw.vertices();
    (0..v.len())
        .map(|j| TurnFrame::new(if j == 0 { v[0] } else { v[j - 1] }, v[j]))
        .collect()
}

#[test]
fn square_with_center_point() {
    let input = pts(&[(0, 0), (4, 0), (4, 4), (0, 4), (2, 2)]);
    let hull = chan_hull(&input).unwrap();
    assert_eq!(hull.winding(), Winding::Clockwise);
    assert_eq!(hull.vertices(), pts(&[(0, 0), (0, 4), (4, 4), (4, 0)]).as_slice());
    assert_eq!(
        hull.canonical().vertices(),
        pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]).as_slice()
    );
    assert!(hull.same_polygon(&graham_scan(&input).unwrap()));
    assert!(hull.same_polygon(&fast_chan_hull(&input).unwrap()));
}

#[test]
fn collinear_input_collapses_to_end_points() {
    let input = pts(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
    let outcome = chan_hull_with(&input, ChanCfg::default(), &mut NoopObserver).unwrap();
    assert_eq!(outcome.hull.vertices(), pts(&[(0, 0), (3, 0)]).as_slice());
    assert_eq!(outcome.guesses(), vec![4]);
    let diagonal = pts(&[(3, 3), (1, 1), (0, 0), (2, 2), (1, 1)]);
    assert_eq!(
        chan_hull(&diagonal).unwrap().vertices(),
        pts(&[(0, 0), (3, 3)]).as_slice()
    );
}

#[test]
fn identical_points_give_single_vertex() {
    let input = vec![Point::new(5, -2); 9];
    assert_eq!(chan_hull(&input).unwrap().vertices(), &[Point::new(5, -2)]);
    assert_eq!(fast_chan_hull(&input).unwrap().vertices(), &[Point::new(5, -2)]);
}

#[test]
fn small_inputs_skip_the_merge_loop() {
    for input in [
        pts(&[(1, 1)]),
        pts(&[(3, 1), (1, 1)]),
        pts(&[(0, 0), (4, 0), (2, 3)]),
    ] {
        let mut trace = Trace::default();
        let outcome = chan_hull_with(&input, ChanCfg::default(), &mut trace).unwrap();
        assert!(outcome.attempts.is_empty());
        assert!(trace.partitions.is_empty() && trace.steps.is_empty());
        assert_eq!(outcome.hull.len(), input.len());
        assert!(outcome.hull.same_polygon(&graham_scan(&input).unwrap()));
    }
    let tri = chan_hull(&pts(&[(0, 0), (4, 0), (2, 3)])).unwrap();
    assert_eq!(tri.vertices(), pts(&[(0, 0), (2, 3), (4, 0)]).as_slice());
    assert!(chan_hull(&[]).is_err());
}

#[test]
fn guess_squares_until_hull_fits() {
    let input = parabola_cloud(50, 950, 7);
    assert_eq!(input.len(), 1000);
    let outcome = chan_hull_with(&input, ChanCfg::default(), &mut NoopObserver).unwrap();
    assert_eq!(outcome.hull.len(), 50);
    assert_eq!(outcome.guesses(), vec![4, 16, 256]);
    let closed: Vec<bool> = outcome.attempts.iter().map(|a| a.closed).collect();
    assert_eq!(closed, vec![false, false, true]);
    assert_eq!(outcome.attempts[0].group_size, 250);
    assert_eq!(outcome.attempts[2].group_size, 4);
    assert!(outcome.hull.same_polygon(&graham_scan(&input).unwrap()));
}

#[test]
fn fast_variant_shrinks_working_set() {
    let input = parabola_cloud(50, 950, 11);
    let outcome = chan_hull_with(&input, ChanCfg::fast(), &mut NoopObserver).unwrap();
    assert_eq!(outcome.hull.len(), 50);
    assert_eq!(outcome.attempts.len(), 3);
    let working: Vec<usize> = outcome.attempts.iter().map(|a| a.working_points).collect();
    assert_eq!(working[0], 1000);
    assert!(working[1] < working[0] && working[2] <= working[1]);
    assert!(working[2] >= 50);
    let last = outcome.attempts[2];
    assert!(last.closed && last.guess >= 50);
    assert_eq!(last.guess, 256.min(last.working_points));
    let standard = chan_hull(&input).unwrap();
    assert_eq!(outcome.hull, standard);
}

#[test]
fn trace_records_every_step() {
    let input = parabola_cloud(12, 40, 3);
    let mut trace = Trace::default();
    let outcome = chan_hull_with(&input, ChanCfg::default(), &mut trace).unwrap();
    assert_eq!(trace.attempts, outcome.attempts);
    assert_eq!(trace.partitions.len(), outcome.attempts.len());
    // the closing attempt takes one step per hull vertex
    let last_guess = *outcome.guesses().last().unwrap();
    let closing: Vec<&Step> = trace.steps_for(last_guess).collect();
    assert_eq!(closing.len(), outcome.hull.len());
    assert_eq!(closing.last().unwrap().to, outcome.hull.vertices()[0]);
    assert!(closing
        .iter()
        .all(|s| (0.0..360.0).contains(&s.angle_deg)));
    // failed attempts stop after exactly `guess` steps
    assert_eq!(trace.steps_for(4).count(), 4);
}

#[test]
fn linear_and_binary_configs_agree() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..10 {
        let input: Vec<Point> = (0..400)
            .map(|_| Point::new(rng.gen_range(-300..300), rng.gen_range(-300..300)))
            .collect();
        let linear = ChanCfg {
            tangent: TangentSearch::Linear,
            ..ChanCfg::default()
        };
        let a = chan_hull_with(&input, linear, &mut NoopObserver).unwrap();
        let b = chan_hull_with(&input, ChanCfg::default(), &mut NoopObserver).unwrap();
        assert_eq!(a.hull, b.hull);
        assert_eq!(a.attempts, b.attempts);
    }
}

#[test]
fn partition_sizes() {
    assert_eq!(group_size(1000, 4), 250);
    assert_eq!(group_size(10, 4), 3);
    assert_eq!(group_size(3, 16), 1);
    let input = parabola_cloud(10, 0, 0);
    let groups = partial_hulls(&input, 3).unwrap();
    assert_eq!(groups.len(), 4);
    assert_eq!(groups[3].len(), 1);
    assert!(groups.iter().all(|g| g.winding() == Winding::CounterClockwise));
    assert!(partial_hulls(&[], 3).is_err());
}

#[test]
fn binary_tangent_matches_linear_for_all_sizes() {
    let mut rng = StdRng::seed_from_u64(2024);
    for k in 1..=200i32 {
        let base: Vec<Point> = (0..k).map(|i| Point::new(i, i * i)).collect();
        let poly = graham_scan(&base).unwrap().into_vertices();
        assert_eq!(poly.len(), k as usize);

        let mut global = base.clone();
        for _ in 0..3 {
            global.push(Point::new(
                rng.gen_range(-k..2 * k + 1),
                rng.gen_range(-k * k..2 * k * k + 1),
            ));
        }
        let frames = wrap_frames(&global);
        let stride = (frames.len() / 16).max(1);

        let n = poly.len();
        for shift in [0, 1, n / 2, n - 1] {
            let mut rotated = poly.clone();
            rotated.rotate_left(shift % n);
            for frame in frames.iter().step_by(stride) {
                assert_eq!(
                    tangent_index_binary(&rotated, frame),
                    tangent_index_linear(&rotated, frame),
                    "k={k} shift={shift} apex={}",
                    frame.apex()
                );
            }
        }
    }
}

#[test]
fn tangent_of_empty_polygon_is_none() {
    let frame = TurnFrame::new(Point::new(0, 0), Point::new(0, 0));
    assert_eq!(tangent_index_binary(&[], &frame), None);
    assert_eq!(find_tangent(&[], &frame, TangentSearch::Linear), None);
}

fn cloud() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-40i32..40, -40i32..40), 1..150)
        .prop_map(|v| v.into_iter().map(Point::from).collect())
}

proptest! {
    #[test]
    fn prop_chan_matches_graham(points in cloud()) {
        let graham = graham_scan(&points).unwrap();
        let chan = chan_hull(&points).unwrap();
        prop_assert_eq!(chan.len(), graham.len());
        prop_assert_eq!(chan.canonical(), graham.canonical());
    }

    #[test]
    fn prop_fast_matches_standard(points in cloud(), initial_guess in 2usize..6) {
        let standard = ChanCfg { initial_guess, ..ChanCfg::default() };
        let fast = ChanCfg { initial_guess, ..ChanCfg::fast() };
        let a = chan_hull_with(&points, standard, &mut NoopObserver).unwrap();
        let b = chan_hull_with(&points, fast, &mut NoopObserver).unwrap();
        prop_assert_eq!(a.hull, b.hull);
    }

    #[test]
    fn prop_hull_is_extreme_and_idempotent(points in cloud()) {
        let first = chan_hull(&points).unwrap();
        let second = chan_hull(&points).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.encloses(&points));
        prop_assert!(first.is_strictly_convex());
        prop_assert!(first.vertices().iter().all(|v| points.contains(v)));
    }

    #[test]
    fn prop_binary_tangent_matches_linear(points in cloud(), extra in cloud()) {
        let poly = graham_scan(&points).unwrap().into_vertices();
        let mut global = points.clone();
        global.extend(extra);
        for frame in wrap_frames(&global) {
            prop_assert_eq!(
                tangent_index_binary(&poly, &frame),
                tangent_index_linear(&poly, &frame)
            );
        }
    }
}

#[test]
fn hull_type_reexport_is_usable() {
    let h: Hull = chan_hull(&pts(&[(0, 0), (2, 0), (1, 2), (1, 1)])).unwrap();
    assert_eq!(h.len(), 3);
}
