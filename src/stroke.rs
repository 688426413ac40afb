use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::palette::PaletteColor;

/// A sampled gesture position, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    /// Milliseconds since the UNIX epoch when the sample was taken
    pub time: u64,
}

impl Point {
    pub fn new(x: f32, y: f32, time: u64) -> Self {
        Self { x, y, time }
    }

    pub fn from_pos(pos: Pos2, time: u64) -> Self {
        Self::new(pos.x, pos.y, time)
    }

    pub fn pos(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }
}

/// Stable identity of a stroke, kept while it moves between history and redo buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StrokeId(Uuid);

impl StrokeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StrokeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StrokeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// One continuous drawn line.
///
/// A stroke always holds at least one point: the only constructor takes the
/// first sample, and points can be appended but never removed. Serialize only,
/// a deserialized stroke could arrive without points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Point>,
    color: PaletteColor,
}

impl Stroke {
    pub fn new(first: Point, color: PaletteColor) -> Self {
        Self {
            id: StrokeId::new(),
            points: vec![first],
            color,
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    /// The most recent sample. Always `Some`, see `Stroke::new`
    pub fn last_point(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Append a sample, keeping timestamps non-decreasing
    pub(crate) fn push_point(&mut self, mut point: Point) {
        let last_time = self.last_point().map_or(0, |p| p.time);
        if point.time < last_time {
            log::warn!(
                "Stroke {}: point at {}ms arrived after {}ms, clamping",
                self.id,
                point.time,
                last_time
            );
            point.time = last_time;
        }
        self.points.push(point);
    }

    /// Screen positions of the samples, shifted by `offset`
    pub fn screen_points(&self, offset: Vec2) -> Vec<Pos2> {
        self.points.iter().map(|p| p.pos() + offset).collect()
    }
}
