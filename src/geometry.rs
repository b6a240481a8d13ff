//! Pure coordinate geometry. All distances are rounded to whole pixels;
//! snap comparisons and displayed lengths downstream are integer-based.

use crate::model::Point;

/// Euclidean distance, rounded to the nearest integer.
pub fn distance(a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt().round()
}

/// Point at absolute distance `d` from `start` along the segment direction.
/// A zero-length segment yields `start` unchanged.
pub fn point_at_distance(start: Point, end: Point, d: f32) -> Point {
    let length = distance(start, end);
    if length == 0.0 {
        return start;
    }
    let t = d / length;
    Point::new(start.x + t * (end.x - start.x), start.y + t * (end.y - start.y))
}

/// Interior angle at vertex `b` between the rays b->a and b->c, in degrees.
/// Computed as `round(180 - theta)` where theta is the angle between the
/// vectors b-a and c-b (law-of-cosines dot-product form). Returns NaN when
/// either magnitude is zero; callers substitute 180 at the display boundary.
pub fn interior_angle(a: Point, b: Point, c: Point) -> f32 {
    let mag_ab = distance(a, b);
    let mag_bc = distance(b, c);
    if mag_ab == 0.0 || mag_bc == 0.0 {
        return f32::NAN;
    }
    let dot = (b.x - a.x) * (c.x - b.x) + (b.y - a.y) * (c.y - b.y);
    let cos_theta = dot / (mag_ab * mag_bc);
    let theta_deg = cos_theta.acos().to_degrees();
    (180.0 - theta_deg).round()
}

/// Radians to degrees, normalized into [0, 360).
pub fn radians_to_degrees(r: f32) -> f32 {
    r.to_degrees().rem_euclid(360.0)
}

/// Placement aid for the angle-arc glyph: given two points equidistant from
/// the vertex along its incident segments, returns the point on the internal
/// bisector at 1.5x the vertex-to-`arc1` distance. Opposite rays have no
/// bisector direction; fall back to the arc midpoint.
pub fn control_point_for_arc(arc1: Point, center: Point, arc2: Point) -> Point {
    let mid = Point::new((arc1.x + arc2.x) / 2.0, (arc1.y + arc2.y) / 2.0);
    let dx = mid.x - center.x;
    let dy = mid.y - center.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return mid;
    }
    let scale = 1.5 * distance(center, arc1) / len;
    Point::new(center.x + dx * scale, center.y + dy * scale)
}
