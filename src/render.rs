//! Renderer adapter contract. The core owns no rendering state; it issues
//! drawing calls as a side effect of committed-state changes or live-drag
//! redraws. `app::painter` provides the egui implementation; tests drive the
//! trait with a recording implementation.

use crate::graph::derive_angles;
use crate::model::{Angle, Segment, SketchConfig};

pub trait SegmentRenderer {
    fn clear(&mut self);
    fn draw_grid(&mut self, spacing: f32);
    /// Line, midpoint length label, and both endpoint markers with labels.
    fn draw_segment(&mut self, segment: &Segment);
    /// Bisector-anchored arc glyph and degree label.
    fn draw_angle_arc(&mut self, angle: &Angle);
}

/// Canonical redraw sequence: clear, grid, every segment in order, then every
/// angle derived from that same set. Synchronous and idempotent: identical
/// input produces the identical ordered call sequence.
pub fn draw_scene(renderer: &mut dyn SegmentRenderer, segments: &[Segment], config: &SketchConfig) {
    renderer.clear();
    renderer.draw_grid(config.grid_spacing);
    for segment in segments {
        renderer.draw_segment(segment);
    }
    for angle in derive_angles(segments) {
        renderer.draw_angle_arc(&angle);
    }
}
