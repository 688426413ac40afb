mod events;
mod handlers;

pub use events::BoardEvent;
pub use handlers::EventLogger;

/// Receives board events synchronously, in the order mutations happen
pub trait EventHandler {
    fn handle_event(&mut self, event: &BoardEvent);
}
