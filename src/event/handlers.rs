use crate::event::{BoardEvent, EventHandler};

/// Writes every board event to the `log` facade
#[derive(Debug, Default)]
pub struct EventLogger {
    seen: usize,
}

impl EventLogger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for EventLogger {
    fn handle_event(&mut self, event: &BoardEvent) {
        self.seen += 1;
        match event {
            // Fires on every pointer move, keep it out of the debug output
            BoardEvent::StrokeExtended { .. } => log::trace!("#{} {:?}", self.seen, event),
            _ => log::debug!("#{} {:?}", self.seen, event),
        }
    }
}
