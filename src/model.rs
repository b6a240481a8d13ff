use eframe::egui;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_pos2(p: egui::Pos2) -> Self {
        Self { x: p.x, y: p.y }
    }

    pub fn to_pos2(self) -> egui::Pos2 {
        egui::pos2(self.x, self.y)
    }

    /// Exact coordinate equality. Endpoint identity for committed geometry;
    /// user input goes through the snap threshold instead.
    pub fn same_point(self, other: Point) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// Single-character endpoint label, assigned lazily on commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Label(pub char);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic label allocator. Labels are never reused after deletion;
/// the sequence resets only on an explicit full clear.
#[derive(Clone, Copy, Debug)]
pub struct LabelSequence {
    start: u32,
    next: u32,
}

impl LabelSequence {
    pub fn new(start: char) -> Self {
        Self {
            start: start as u32,
            next: start as u32,
        }
    }

    pub fn allocate(&mut self) -> Label {
        let c = char::from_u32(self.next).unwrap_or(char::REPLACEMENT_CHARACTER);
        self.next += 1;
        Label(c)
    }

    pub fn reset(&mut self) {
        self.next = self.start;
    }
}

impl Default for LabelSequence {
    fn default() -> Self {
        Self::new('A')
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub start_name: Option<Label>,
    pub end_name: Option<Label>,
}

impl Segment {
    /// In-progress segment shown during a gesture, before labels exist.
    pub fn provisional(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            start_name: None,
            end_name: None,
        }
    }

    pub fn carries(&self, label: Label) -> bool {
        self.start_name == Some(label) || self.end_name == Some(label)
    }
}

/// Vertex angle between two segments sharing `center`, derived per render
/// pass and never persisted. `degrees` may be NaN for degenerate vectors;
/// the renderer substitutes 180 for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle {
    pub start: Point,
    pub center: Point,
    pub end: Point,
    pub degrees: f32,
}

/// Committed segments, ordered by creation. Order is irrelevant to rendering
/// but load-bearing for first-match-wins lookups.
#[derive(Clone, Debug, Default)]
pub struct Sketch {
    pub segments: Vec<Segment>,
}

impl Sketch {
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SketchConfig {
    pub grid_spacing: f32,
    pub snap_threshold: f32,
    pub label_start: char,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            grid_spacing: 20.0,
            snap_threshold: 30.0,
            label_start: 'A',
        }
    }
}

impl SketchConfig {
    /// Displayed length in "centimeters": pixel distance over 4 grid units,
    /// rounded to two decimals.
    pub fn length_cm(&self, distance: f32) -> f32 {
        let cm = distance / (4.0 * self.grid_spacing);
        (cm * 100.0).round() / 100.0
    }
}
