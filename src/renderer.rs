// src/renderer.rs
use egui::{Painter, Rect, Shape, Stroke as EguiStroke, Vec2};
use serde::Serialize;

use crate::config::{BoardConfig, DEFAULT_STROKE_WIDTH};
use crate::palette::PaletteColor;
use crate::store::StrokeStore;
use crate::stroke::{Stroke, StrokeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Round,
}

/// Drawable form of one stroke: an open polyline with its paint settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPath {
    pub id: StrokeId,
    /// Space separated "x,y" pairs in drawing order
    pub points: String,
    pub color: PaletteColor,
    pub stroke_width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

/// Formats the stroke's samples as a polyline point list, e.g. `"10,10 20,10 20,20"`
pub fn path_string(stroke: &Stroke) -> String {
    stroke
        .points()
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Projects the stroke store into something that can be drawn.
///
/// Holds no drawing state: every call recomputes from the store it is given.
#[derive(Debug, Clone)]
pub struct Renderer {
    stroke_width: f32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl Renderer {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            stroke_width: config.stroke_width,
        }
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Builds one path per stroke, in z-order
    ///
    /// Args:
    ///     store (StrokeStore): The store to project
    ///
    /// Returns:
    ///     Vec<RenderedPath>: Later entries paint over earlier ones
    pub fn render(&self, store: &StrokeStore) -> Vec<RenderedPath> {
        store
            .strokes()
            .iter()
            .map(|stroke| RenderedPath {
                id: stroke.id(),
                points: path_string(stroke),
                color: stroke.color(),
                stroke_width: self.stroke_width,
                line_cap: LineCap::Round,
                line_join: LineJoin::Round,
            })
            .collect()
    }

    /// Paints the background and all strokes into `rect`
    ///
    /// Stroke coordinates are local to the canvas, so they are offset by `rect.min`.
    /// A stroke with a single sample has no segment and paints nothing.
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The canvas area
    ///     store (StrokeStore): The strokes to draw
    pub fn paint(&self, painter: &Painter, rect: Rect, store: &StrokeStore) {
        painter.rect_filled(rect, 0.0, store.background().to_color32());

        let offset = rect.min.to_vec2();
        for stroke in store.strokes() {
            painter.extend(self.stroke_shapes(stroke, offset));
        }
    }

    /// Shapes for one stroke in screen space: a disc per vertex, then the polyline.
    ///
    /// Empty for single-point strokes, which have no segment to draw.
    pub fn stroke_shapes(&self, stroke: &Stroke, offset: Vec2) -> Vec<Shape> {
        if stroke.points().len() < 2 {
            return Vec::new();
        }
        let color = stroke.color().to_color32();
        let radius = self.stroke_width / 2.0;
        let points = stroke.screen_points(offset);

        // egui lines have butt ends, discs at the vertices give round caps and joins
        let mut shapes: Vec<Shape> = points
            .iter()
            .map(|&p| Shape::circle_filled(p, radius, color))
            .collect();
        shapes.push(Shape::line(points, EguiStroke::new(self.stroke_width, color)));
        shapes
    }
}
