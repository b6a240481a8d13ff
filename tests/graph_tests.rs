//! Segment graph lookups: endpoint flattening, threshold snapping,
//! first-match-wins lookup orientation, and derived angles.

use sketchrule::graph::{
    all_endpoints, derive_angles, endpoint_share_count, lookup_by_point, nearest_endpoint,
    shared_endpoint,
};
use sketchrule::model::{Label, Point, Segment};

const THRESHOLD: f32 = 30.0;

fn p(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

fn seg(start: Point, end: Point, start_name: char, end_name: char) -> Segment {
    Segment {
        start,
        end,
        start_name: Some(Label(start_name)),
        end_name: Some(Label(end_name)),
    }
}

#[test]
fn all_endpoints_preserves_order_and_duplicates() {
    let shared = p(80.0, 0.0);
    let segments = [
        seg(p(0.0, 0.0), shared, 'A', 'B'),
        seg(shared, p(80.0, 80.0), 'B', 'C'),
    ];
    let points = all_endpoints(&segments);
    assert_eq!(points, vec![p(0.0, 0.0), shared, shared, p(80.0, 80.0)]);
}

#[test]
fn nearest_endpoint_snaps_within_threshold() {
    let segments = [seg(p(100.0, 100.0), p(300.0, 100.0), 'A', 'B')];
    // distance to (100,100) is ~11.18, well under 30
    let snapped = nearest_endpoint(&segments, p(110.0, 105.0), THRESHOLD);
    assert_eq!(snapped, p(100.0, 100.0));
}

#[test]
fn nearest_endpoint_at_exact_threshold_keeps_candidate() {
    let segments = [seg(p(0.0, 0.0), p(200.0, 0.0), 'A', 'B')];
    // strictly-less comparison: 30 away does not snap
    let kept = nearest_endpoint(&segments, p(30.0, 0.0), THRESHOLD);
    assert_eq!(kept, p(30.0, 0.0));
}

#[test]
fn nearest_endpoint_tie_goes_to_first_in_iteration_order() {
    let segments = [
        seg(p(0.0, 0.0), p(0.0, 200.0), 'A', 'B'),
        seg(p(10.0, 0.0), p(10.0, 200.0), 'C', 'D'),
    ];
    // candidate is 5 away from both (0,0) and (10,0)
    assert_eq!(nearest_endpoint(&segments, p(5.0, 0.0), THRESHOLD), p(0.0, 0.0));
}

#[test]
fn nearest_endpoint_without_match_returns_candidate() {
    let candidate = p(500.0, 500.0);
    let segments = [seg(p(0.0, 0.0), p(100.0, 0.0), 'A', 'B')];
    assert_eq!(nearest_endpoint(&segments, candidate, THRESHOLD), candidate);
}

#[test]
fn lookup_orients_hit_around_the_matched_endpoint() {
    let segments = [seg(p(0.0, 0.0), p(80.0, 0.0), 'A', 'B')];
    let hit = lookup_by_point(&segments, p(82.0, 2.0), THRESHOLD).expect("endpoint B is in range");
    assert_eq!(hit.name, Some(Label('B')));
    assert_eq!(hit.point, p(80.0, 0.0));
    assert_eq!(hit.opposite, p(0.0, 0.0));
}

#[test]
fn lookup_returns_the_first_matching_segment() {
    let shared = p(80.0, 0.0);
    let segments = [
        seg(p(0.0, 0.0), shared, 'A', 'B'),
        seg(shared, p(80.0, 80.0), 'B', 'C'),
    ];
    let hit = lookup_by_point(&segments, shared, THRESHOLD).expect("shared point is in range");
    // both segments match; the first one wins and its end is the match
    assert_eq!(hit.name, Some(Label('B')));
    assert_eq!(hit.opposite, p(0.0, 0.0));
}

#[test]
fn lookup_miss_is_none_not_degenerate_geometry() {
    let segments = [seg(p(0.0, 0.0), p(80.0, 0.0), 'A', 'B')];
    assert!(lookup_by_point(&segments, p(400.0, 400.0), THRESHOLD).is_none());
}

#[test]
fn shared_endpoint_checks_all_four_combinations() {
    let shared = p(50.0, 50.0);
    let a = seg(p(0.0, 0.0), shared, 'A', 'B');
    let b = seg(shared, p(100.0, 0.0), 'B', 'C');
    let c = seg(p(100.0, 100.0), shared, 'D', 'B');
    assert_eq!(shared_endpoint(&a, &b), Some(shared));
    assert_eq!(shared_endpoint(&a, &c), Some(shared));
    assert_eq!(shared_endpoint(&b, &c), Some(shared));
}

#[test]
fn shared_endpoint_prefers_start_of_the_first_segment() {
    // degenerate: both endpoints of `a` coincide with endpoints of `b`
    let a = seg(p(0.0, 0.0), p(100.0, 0.0), 'A', 'B');
    let b = seg(p(100.0, 0.0), p(0.0, 0.0), 'B', 'A');
    assert_eq!(shared_endpoint(&a, &b), Some(a.start));
}

#[test]
fn shared_endpoint_of_disjoint_segments_is_none() {
    let a = seg(p(0.0, 0.0), p(100.0, 0.0), 'A', 'B');
    let b = seg(p(0.0, 50.0), p(100.0, 50.0), 'C', 'D');
    assert_eq!(shared_endpoint(&a, &b), None);
}

#[test]
fn endpoint_share_count_uses_exact_equality() {
    let joint = p(50.0, 50.0);
    let segments = [
        seg(joint, p(150.0, 50.0), 'A', 'B'),
        seg(joint, p(50.0, 150.0), 'A', 'C'),
        seg(p(50.1, 50.0), p(150.0, 150.0), 'D', 'E'),
    ];
    // the nearly-coincident third endpoint does not count
    assert_eq!(endpoint_share_count(&segments, joint), 2);
}

#[test]
fn derive_angles_reports_90_degrees_for_a_right_angle() {
    let shared = p(80.0, 0.0);
    let segments = [
        seg(p(0.0, 0.0), shared, 'A', 'B'),
        seg(shared, p(80.0, 80.0), 'B', 'C'),
    ];
    let angles = derive_angles(&segments);
    assert_eq!(angles.len(), 1);
    assert_eq!(angles[0].center, shared);
    assert_eq!(angles[0].start, p(0.0, 0.0));
    assert_eq!(angles[0].end, p(80.0, 80.0));
    assert_eq!(angles[0].degrees, 90.0);
}

#[test]
fn derive_angles_covers_every_unordered_pair_at_a_junction() {
    let joint = p(50.0, 50.0);
    let segments = [
        seg(joint, p(150.0, 50.0), 'A', 'B'),
        seg(joint, p(50.0, 150.0), 'A', 'C'),
        seg(joint, p(150.0, 150.0), 'A', 'D'),
    ];
    assert_eq!(derive_angles(&segments).len(), 3);
}

#[test]
fn derive_angles_of_disjoint_segments_is_empty() {
    let segments = [
        seg(p(0.0, 0.0), p(100.0, 0.0), 'A', 'B'),
        seg(p(0.0, 50.0), p(100.0, 50.0), 'C', 'D'),
    ];
    assert!(derive_angles(&segments).is_empty());
}
