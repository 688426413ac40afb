use egui::{Pos2, Response};

mod gestures;
pub use gestures::GestureTracker;

/// Gesture input in canvas-local coordinates (origin at the canvas' top-left corner)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer went down on the canvas
    GestureStart { position: Pos2 },
    /// The pointer moved while held down
    GestureMove { position: Pos2 },
}

/// Handles converting the canvas' egui drag response into our InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    last_position: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one frame of the canvas response into gesture events
    pub fn process_response(&mut self, response: &Response) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let origin = response.rect.min;

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                let position = Self::to_local(pos, origin);
                events.push(InputEvent::GestureStart { position });
                self.last_position = Some(position);
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                let position = Self::to_local(pos, origin);
                // Only report actual movement
                if Some(position) != self.last_position {
                    events.push(InputEvent::GestureMove { position });
                    self.last_position = Some(position);
                }
            }
        }

        if response.drag_stopped() {
            self.last_position = None;
        }

        events
    }

    fn to_local(pos: Pos2, origin: Pos2) -> Pos2 {
        (pos - origin).to_pos2()
    }
}
