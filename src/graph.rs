//! Lookups over the committed segment list. There is no adjacency structure;
//! segments sharing a point within the snap threshold end up with the same
//! label at that point as an emergent property of snapping.

use crate::geometry::{distance, interior_angle};
use crate::model::{Angle, Label, Point, Segment};

/// Every segment endpoint, order-preserving, duplicates retained. Callers
/// dedupe via distance when snapping, not via equality.
pub fn all_endpoints(segments: &[Segment]) -> Vec<Point> {
    segments.iter().flat_map(|s| [s.start, s.end]).collect()
}

/// The existing endpoint strictly closer than `threshold` to `candidate`
/// that minimizes distance, or `candidate` itself when none qualifies.
/// Ties go to the first endpoint encountered in iteration order.
pub fn nearest_endpoint(segments: &[Segment], candidate: Point, threshold: f32) -> Point {
    let mut closest = candidate;
    let mut min_distance = threshold;
    for point in all_endpoints(segments) {
        let d = distance(point, candidate);
        if d < min_distance {
            min_distance = d;
            closest = point;
        }
    }
    closest
}

/// A segment endpoint matched by proximity, oriented so `point` is the
/// matched end and `opposite` the far end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EndpointHit {
    pub name: Option<Label>,
    pub point: Point,
    pub opposite: Point,
}

/// First segment (in creation order) with any endpoint within `threshold`
/// of `candidate`; the start endpoint is preferred within a segment.
/// `None` means not found, never degenerate geometry.
pub fn lookup_by_point(segments: &[Segment], candidate: Point, threshold: f32) -> Option<EndpointHit> {
    for segment in segments {
        if distance(segment.start, candidate) < threshold {
            return Some(EndpointHit {
                name: segment.start_name,
                point: segment.start,
                opposite: segment.end,
            });
        }
        if distance(segment.end, candidate) < threshold {
            return Some(EndpointHit {
                name: segment.end_name,
                point: segment.end,
                opposite: segment.start,
            });
        }
    }
    None
}

/// Exact-equality common point of two segments, checking the four
/// start/end combinations with start-of-`a` preferred.
pub fn shared_endpoint(a: &Segment, b: &Segment) -> Option<Point> {
    if a.start.same_point(b.start) || a.start.same_point(b.end) {
        return Some(a.start);
    }
    if a.end.same_point(b.start) || a.end.same_point(b.end) {
        return Some(a.end);
    }
    None
}

/// How many segment endpoints coincide exactly with `point`.
pub fn endpoint_share_count(segments: &[Segment], point: Point) -> usize {
    all_endpoints(segments)
        .into_iter()
        .filter(|p| p.same_point(point))
        .count()
}

fn far_endpoint(segment: &Segment, shared: Point) -> Point {
    if segment.start.same_point(shared) {
        segment.end
    } else {
        segment.start
    }
}

/// Angles for every unordered pair of segments sharing a common endpoint,
/// recomputed from scratch on each render pass. Degenerate pairs keep their
/// NaN degrees; substitution happens at the display boundary.
pub fn derive_angles(segments: &[Segment]) -> Vec<Angle> {
    let mut angles = Vec::new();
    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            let Some(center) = shared_endpoint(&segments[i], &segments[j]) else {
                continue;
            };
            let start = far_endpoint(&segments[i], center);
            let end = far_endpoint(&segments[j], center);
            angles.push(Angle {
                start,
                center,
                end,
                degrees: interior_angle(start, center, end),
            });
        }
    }
    angles
}
