//! The gesture state machine. Two behaviors share one press/move/release
//! protocol; the active tool is a trait object resolved from `ToolKind`, and
//! gesture state lives in a `ToolSession` value that handlers replace rather
//! than mutate.

use crate::graph;
use crate::model::{Label, LabelSequence, Point, Segment, Sketch, SketchConfig};
use crate::render::{SegmentRenderer, draw_scene};

/// Transient state of an in-progress gesture. Created on press, consumed on
/// release; a press always overwrites whatever was left behind.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ToolSession {
    /// Snapped start of the in-progress segment.
    pub anchor: Option<Point>,
    /// Select only: label identifying the segment whose far endpoint is
    /// being repositioned.
    pub dragged: Option<Label>,
}

impl ToolSession {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.anchor.is_none() && self.dragged.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolKind {
    Draw,
    Select,
}

impl ToolKind {
    pub fn behavior(self) -> &'static dyn SketchTool {
        match self {
            ToolKind::Draw => &DrawTool,
            ToolKind::Select => &SelectTool,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Draw => "Draw",
            ToolKind::Select => "Select",
        }
    }
}

pub trait SketchTool {
    /// Interpret a press against the committed graph; returns the session
    /// replacing the current one. Never mutates the graph.
    fn on_press(&self, sketch: &Sketch, config: &SketchConfig, point: Point) -> ToolSession;

    /// Redraw the live working set for an in-progress gesture. Returns false
    /// without drawing when no gesture is active; pointer movement before a
    /// press is expected and harmless.
    fn on_move(
        &self,
        sketch: &Sketch,
        session: &ToolSession,
        config: &SketchConfig,
        cursor: Point,
        renderer: &mut dyn SegmentRenderer,
    ) -> bool;

    /// Commit the gesture into the graph and return the cleared session.
    /// A release with no anchor is a no-op.
    fn on_release(
        &self,
        sketch: &mut Sketch,
        labels: &mut LabelSequence,
        session: ToolSession,
        config: &SketchConfig,
        point: Point,
    ) -> ToolSession;
}

/// Resolve both endpoints of a finished gesture against `committed`: an end
/// landing within the snap threshold of an existing endpoint reuses its
/// position and label, anything else keeps the raw point and takes the next
/// label from the sequence. The start end is resolved (and named) first.
fn resolve_segment(
    committed: &[Segment],
    labels: &mut LabelSequence,
    config: &SketchConfig,
    anchor: Point,
    release: Point,
) -> Segment {
    let start_hit = graph::lookup_by_point(committed, anchor, config.snap_threshold);
    let end_hit = graph::lookup_by_point(committed, release, config.snap_threshold);
    let start = start_hit.map(|h| h.point).unwrap_or(anchor);
    let end = end_hit.map(|h| h.point).unwrap_or(release);
    let start_name = start_hit
        .and_then(|h| h.name)
        .unwrap_or_else(|| labels.allocate());
    let end_name = end_hit
        .and_then(|h| h.name)
        .unwrap_or_else(|| labels.allocate());
    Segment {
        start,
        end,
        start_name: Some(start_name),
        end_name: Some(end_name),
    }
}

/// Draws a new segment from a snapped anchor to the release point.
pub struct DrawTool;

impl SketchTool for DrawTool {
    fn on_press(&self, sketch: &Sketch, config: &SketchConfig, point: Point) -> ToolSession {
        ToolSession {
            anchor: Some(graph::nearest_endpoint(
                &sketch.segments,
                point,
                config.snap_threshold,
            )),
            dragged: None,
        }
    }

    fn on_move(
        &self,
        sketch: &Sketch,
        session: &ToolSession,
        config: &SketchConfig,
        cursor: Point,
        renderer: &mut dyn SegmentRenderer,
    ) -> bool {
        let Some(anchor) = session.anchor else {
            return false;
        };
        // Only the anchor was snapped; the moving end tracks the raw cursor.
        let mut working = sketch.segments.clone();
        working.push(Segment::provisional(anchor, cursor));
        draw_scene(renderer, &working, config);
        true
    }

    fn on_release(
        &self,
        sketch: &mut Sketch,
        labels: &mut LabelSequence,
        session: ToolSession,
        config: &SketchConfig,
        point: Point,
    ) -> ToolSession {
        let Some(anchor) = session.anchor else {
            return ToolSession::idle();
        };
        let segment = resolve_segment(&sketch.segments, labels, config, anchor, point);
        sketch.push(segment);
        ToolSession::idle()
    }
}

/// Repositions the far endpoint of an existing segment, reconnecting it to
/// whatever it is released on.
pub struct SelectTool;

impl SketchTool for SelectTool {
    fn on_press(&self, sketch: &Sketch, config: &SketchConfig, point: Point) -> ToolSession {
        let Some(hit) = graph::lookup_by_point(&sketch.segments, point, config.snap_threshold)
        else {
            return ToolSession::idle();
        };
        let Some(name) = hit.name else {
            return ToolSession::idle();
        };
        // Junction guard: a shared endpoint cannot be dragged. It is ambiguous
        // which segment should move, and the label filter below would take
        // every segment meeting at the joint with it.
        if graph::endpoint_share_count(&sketch.segments, hit.point) > 1 {
            return ToolSession::idle();
        }
        ToolSession {
            anchor: Some(hit.opposite),
            dragged: Some(name),
        }
    }

    fn on_move(
        &self,
        sketch: &Sketch,
        session: &ToolSession,
        config: &SketchConfig,
        cursor: Point,
        renderer: &mut dyn SegmentRenderer,
    ) -> bool {
        let (Some(anchor), Some(label)) = (session.anchor, session.dragged) else {
            return false;
        };
        let mut working: Vec<Segment> = sketch
            .segments
            .iter()
            .filter(|s| !s.carries(label))
            .copied()
            .collect();
        working.push(Segment {
            start: anchor,
            end: cursor,
            start_name: None,
            end_name: Some(label),
        });
        draw_scene(renderer, &working, config);
        true
    }

    fn on_release(
        &self,
        sketch: &mut Sketch,
        labels: &mut LabelSequence,
        session: ToolSession,
        config: &SketchConfig,
        point: Point,
    ) -> ToolSession {
        let (Some(anchor), Some(label)) = (session.anchor, session.dragged) else {
            return ToolSession::idle();
        };
        // Snap against the graph minus the segment being moved, so it cannot
        // snap to itself.
        let filtered: Vec<Segment> = sketch
            .segments
            .iter()
            .filter(|s| !s.carries(label))
            .copied()
            .collect();
        let segment = resolve_segment(&filtered, labels, config, anchor, point);
        sketch.segments = filtered;
        sketch.push(segment);
        ToolSession::idle()
    }
}
