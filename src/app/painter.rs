//! egui implementation of the renderer adapter. Coordinates arriving from
//! the core are canvas-local; this is the only place that translates them
//! onto the screen.

use crate::geometry::{control_point_for_arc, distance, point_at_distance};
use crate::model::{Angle, Label, Point, Segment, SketchConfig};
use crate::render::SegmentRenderer;
use eframe::egui;

const SEGMENT_STROKE_WIDTH: f32 = 2.0;
const POINT_RADIUS: f32 = 5.0;
const ARC_RADIUS: f32 = 30.0;
const ARC_STEPS: usize = 24;
const LABEL_FONT_SIZE: f32 = 12.0;

pub(super) struct PainterRenderer<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    config: SketchConfig,
    background: egui::Color32,
    grid_color: egui::Color32,
    foreground: egui::Color32,
}

impl<'a> PainterRenderer<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect, config: SketchConfig) -> Self {
        let style = painter.ctx().style();
        Self {
            painter,
            rect,
            config,
            background: style.visuals.extreme_bg_color,
            grid_color: egui::Color32::from_gray(60),
            foreground: style.visuals.strong_text_color(),
        }
    }

    fn to_screen(&self, p: Point) -> egui::Pos2 {
        p.to_pos2() + self.rect.min.to_vec2()
    }

    fn text(&self, pos: egui::Pos2, anchor: egui::Align2, s: String) {
        self.painter.text(
            pos,
            anchor,
            s,
            egui::FontId::proportional(LABEL_FONT_SIZE),
            self.foreground,
        );
    }

    fn draw_endpoint(&self, pos: egui::Pos2, name: Option<Label>) {
        self.painter.circle_filled(pos, POINT_RADIUS, self.foreground);
        if let Some(name) = name {
            self.text(
                pos + egui::vec2(-10.0, -10.0),
                egui::Align2::LEFT_BOTTOM,
                name.to_string(),
            );
        }
    }
}

impl SegmentRenderer for PainterRenderer<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn draw_grid(&mut self, spacing: f32) {
        if spacing <= 0.0 {
            return;
        }
        let stroke = egui::Stroke::new(1.0, self.grid_color);
        let mut x = self.rect.min.x;
        while x < self.rect.max.x {
            self.painter.line_segment(
                [
                    egui::pos2(x, self.rect.min.y),
                    egui::pos2(x, self.rect.max.y),
                ],
                stroke,
            );
            x += spacing;
        }
        let mut y = self.rect.min.y;
        while y < self.rect.max.y {
            self.painter.line_segment(
                [
                    egui::pos2(self.rect.min.x, y),
                    egui::pos2(self.rect.max.x, y),
                ],
                stroke,
            );
            y += spacing;
        }
    }

    fn draw_segment(&mut self, segment: &Segment) {
        let a = self.to_screen(segment.start);
        let b = self.to_screen(segment.end);
        self.painter.line_segment(
            [a, b],
            egui::Stroke::new(SEGMENT_STROKE_WIDTH, self.foreground),
        );

        let cm = self.config.length_cm(distance(segment.start, segment.end));
        let mid = egui::pos2((a.x + b.x) / 2.0, (a.y + b.y) / 2.0 + 15.0);
        self.text(mid, egui::Align2::CENTER_CENTER, format!("{cm:.2} cm"));

        self.draw_endpoint(a, segment.start_name);
        self.draw_endpoint(b, segment.end_name);
    }

    fn draw_angle_arc(&mut self, angle: &Angle) {
        let c = angle.center;
        let center_screen = self.to_screen(c);
        let start_angle = (angle.start.y - c.y).atan2(angle.start.x - c.x);
        let end_angle = (angle.end.y - c.y).atan2(angle.end.x - c.x);

        // Minor-arc sweep; its sign is the sign of the cross product of the
        // two boundary vectors, so the arc always opens into the measured
        // interior angle.
        let mut sweep = end_angle - start_angle;
        if sweep > std::f32::consts::PI {
            sweep -= std::f32::consts::TAU;
        } else if sweep < -std::f32::consts::PI {
            sweep += std::f32::consts::TAU;
        }

        let points: Vec<egui::Pos2> = (0..=ARC_STEPS)
            .map(|i| {
                let t = start_angle + sweep * (i as f32 / ARC_STEPS as f32);
                center_screen + egui::vec2(t.cos(), t.sin()) * ARC_RADIUS
            })
            .collect();
        self.painter
            .add(egui::Shape::line(points, egui::Stroke::new(1.0, self.foreground)));

        // Degenerate angle vectors come through as NaN; show the flat angle.
        let display = if angle.degrees.is_nan() {
            180.0
        } else {
            angle.degrees
        };
        let p1 = point_at_distance(c, angle.start, ARC_RADIUS);
        let p2 = point_at_distance(c, angle.end, ARC_RADIUS);
        let label_at = control_point_for_arc(p1, c, p2);
        self.text(
            self.to_screen(label_at),
            egui::Align2::CENTER_CENTER,
            format!("{display:.0}\u{b0}"),
        );
    }
}
