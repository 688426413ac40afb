//! Ownership of the drawing: stroke history, redo buffer, current color and background.
//!
//! Every operation is defined in every state. Operations that have nothing to
//! act on (undo with no strokes, redo with an empty buffer, extending before any
//! stroke was begun) leave the store untouched and emit no event.

use crate::config::BoardConfig;
use crate::event::{BoardEvent, EventHandler};
use crate::palette::{Background, PaletteColor};
use crate::stroke::{Point, Stroke};

/// Handlers told about every effective mutation.
///
/// Observers watch one particular store, so a cloned store starts with none.
#[derive(Default)]
struct Observers(Vec<Box<dyn EventHandler>>);

impl Clone for Observers {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{} observers>", self.0.len())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StrokeStore {
    /// Drawing order, later strokes paint on top
    strokes: Vec<Stroke>,
    /// Stack of undone strokes, last element is the most recently undone
    redo_stack: Vec<Stroke>,
    current_color: PaletteColor,
    background: Background,
    /// Bumped on every effective mutation
    version: u64,
    observers: Observers,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &BoardConfig) -> Self {
        Self {
            current_color: config.initial_color,
            background: config.initial_background,
            ..Self::default()
        }
    }

    /// Register a handler notified synchronously after each effective mutation.
    ///
    /// Returns how many observers the store now has.
    pub fn subscribe(&mut self, handler: Box<dyn EventHandler>) -> usize {
        self.observers.0.push(handler);
        self.observers.0.len()
    }

    /// Record an effective mutation and notify observers before returning
    fn commit(&mut self, event: BoardEvent) {
        self.version += 1;
        for observer in &mut self.observers.0 {
            observer.handle_event(&event);
        }
    }

    /// Start a new stroke at `point`. Invalidates the redo buffer.
    pub fn begin_stroke(&mut self, point: Point, color: PaletteColor) {
        let stroke = Stroke::new(point, color);
        let id = stroke.id();
        self.strokes.push(stroke);
        if !self.redo_stack.is_empty() {
            log::debug!("Discarding {} redo entries", self.redo_stack.len());
            self.redo_stack.clear();
        }
        self.commit(BoardEvent::StrokeStarted { id, color });
    }

    /// Append `point` to the last stroke. Does nothing when there are no strokes.
    pub fn extend_active_stroke(&mut self, point: Point) {
        let Some(stroke) = self.strokes.last_mut() else {
            log::trace!("extend_active_stroke with no stroke, ignoring");
            return;
        };
        stroke.push_point(point);
        let event = BoardEvent::StrokeExtended {
            id: stroke.id(),
            point_count: stroke.points().len(),
        };
        self.commit(event);
    }

    /// Move the last stroke onto the redo buffer
    pub fn undo(&mut self) {
        let Some(stroke) = self.strokes.pop() else {
            log::trace!("Nothing to undo");
            return;
        };
        let id = stroke.id();
        self.redo_stack.push(stroke);
        self.commit(BoardEvent::Undone { id });
    }

    /// Move the most recently undone stroke back onto the history
    pub fn redo(&mut self) {
        let Some(stroke) = self.redo_stack.pop() else {
            log::trace!("Nothing to redo");
            return;
        };
        let id = stroke.id();
        self.strokes.push(stroke);
        self.commit(BoardEvent::Redone { id });
    }

    /// Discard all strokes and the redo buffer
    pub fn clear(&mut self) {
        if self.strokes.is_empty() && self.redo_stack.is_empty() {
            log::trace!("Board already empty");
            return;
        }
        let event = BoardEvent::Cleared {
            discarded_strokes: self.strokes.len(),
            discarded_redo: self.redo_stack.len(),
        };
        self.strokes.clear();
        self.redo_stack.clear();
        self.commit(event);
    }

    /// Select the color for strokes begun from now on
    pub fn set_color(&mut self, color: PaletteColor) {
        if self.current_color == color {
            return;
        }
        let old = std::mem::replace(&mut self.current_color, color);
        self.commit(BoardEvent::ColorChanged { old, new: color });
    }

    pub fn toggle_background(&mut self) {
        self.background = self.background.toggled();
        self.commit(BoardEvent::BackgroundToggled {
            new: self.background,
        });
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn redo_stack(&self) -> &[Stroke] {
        &self.redo_stack
    }

    /// The stroke moves would extend, if any
    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.strokes.last()
    }

    pub fn current_color(&self) -> PaletteColor {
        self.current_color
    }

    pub fn background(&self) -> Background {
        self.background
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn can_undo(&self) -> bool {
        !self.strokes.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
