use super::*;

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn empty_and_single_point_yield_nothing() {
    assert!(segment(Vec::new(), 0.05, 100.0).is_empty());
    assert!(segment(pts(&[(1.0, 1.0)]), 0.05, 100.0).is_empty());
}

#[test]
fn all_close_points_form_one_segment() {
    let input = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 1.0)]);
    let segs = segment(input.clone(), 0.05, 100.0);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].points(), input.as_slice());
}

#[test]
fn distance_equal_to_threshold_splits() {
    // 0.5 * 10 is exactly 5.0, as is the distance.
    let segs = segment(pts(&[(0.0, 0.0), (5.0, 0.0)]), 0.5, 10.0);
    assert!(segs.is_empty());

    let segs = segment(pts(&[(0.0, 0.0), (4.999, 0.0)]), 0.5, 10.0);
    assert_eq!(segs.len(), 1);
}

#[test]
fn singletons_between_runs_are_dropped() {
    let input = pts(&[
        (0.0, 0.0),
        (1.0, 1.0),
        (50.0, 50.0),
        (90.0, 0.0),
        (91.0, 0.0),
        (92.0, 0.0),
    ]);
    let segs = segment(input, 0.05, 100.0);
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].len(), 2);
    assert_eq!(segs[1].len(), 3);
    assert_eq!(segs[1].points()[0], Point::new(90.0, 0.0));
}

#[test]
fn trailing_singleton_is_dropped() {
    let segs = segment(pts(&[(0.0, 0.0), (1.41, 1.41), (90.0, 90.0)]), 0.05, 100.0);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].len(), 2);
}

#[test]
fn runs_drift_through_short_hops() {
    let input: Vec<Point> = (0..100).map(|i| Point::new(f64::from(i) * 4.0, 0.0)).collect();
    let segs = segment(input, 0.05, 100.0);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].len(), 100);
    let last = segs[0].points()[99];
    assert!(last.distance(segs[0].points()[0]) > 300.0);
}

#[test]
fn resegmenting_a_segment_returns_it_unchanged() {
    let input = pts(&[
        (0.0, 0.0),
        (2.0, 1.0),
        (3.0, 3.0),
        (40.0, 40.0),
        (41.0, 41.5),
        (42.0, 43.0),
    ]);
    for seg in segment(input, 0.05, 100.0) {
        let again = segment(seg.points().to_vec(), 0.05, 100.0);
        assert_eq!(again, vec![seg]);
    }
}

#[test]
fn segments_preserve_input_order() {
    let input = pts(&[(80.0, 80.0), (81.0, 80.0), (0.0, 0.0), (1.0, 0.0)]);
    let segs = segment(input, 0.05, 100.0);
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].points()[0], Point::new(80.0, 80.0));
    assert_eq!(segs[1].points()[0], Point::new(0.0, 0.0));
}

#[test]
fn segment_new_rejects_short_runs() {
    assert!(Segment::new(Vec::new()).is_none());
    assert!(Segment::new(pts(&[(0.0, 0.0)])).is_none());
    assert!(Segment::new(pts(&[(0.0, 0.0), (1.0, 1.0)])).is_some());
}
