use egui::Pos2;

use super::InputEvent;
use crate::store::StrokeStore;
use crate::stroke::Point;
use crate::util::time;

/// Turns gesture events into timestamped points and feeds them to the stroke store.
///
/// Only a single pointer is tracked. Timestamps come from the tracker's clock,
/// not from the input event, and never go backwards even if the clock does.
pub struct GestureTracker {
    clock: Box<dyn FnMut() -> u64>,
    last_time: u64,
}

impl std::fmt::Debug for GestureTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureTracker")
            .field("last_time", &self.last_time)
            .finish_non_exhaustive()
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureTracker {
    /// Tracker stamping points with the wall clock
    pub fn new() -> Self {
        Self::with_clock(time::now_millis)
    }

    /// Tracker stamping points with a custom millisecond clock
    pub fn with_clock(clock: impl FnMut() -> u64 + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last_time: 0,
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent, store: &mut StrokeStore) {
        match *event {
            InputEvent::GestureStart { position } => self.on_gesture_start(position, store),
            InputEvent::GestureMove { position } => self.on_gesture_move(position, store),
        }
    }

    /// Begin a new stroke in the store's current color
    pub fn on_gesture_start(&mut self, position: Pos2, store: &mut StrokeStore) {
        let point = self.make_point(position);
        let color = store.current_color();
        log::debug!("Gesture start at ({}, {}) in {}", point.x, point.y, color);
        store.begin_stroke(point, color);
    }

    /// Extend the active stroke; ignored by the store when nothing was begun
    pub fn on_gesture_move(&mut self, position: Pos2, store: &mut StrokeStore) {
        let point = self.make_point(position);
        store.extend_active_stroke(point);
    }

    fn make_point(&mut self, position: Pos2) -> Point {
        let now = (self.clock)();
        self.last_time = self.last_time.max(now);
        Point::from_pos(position, self.last_time)
    }
}
