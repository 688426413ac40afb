use crate::palette::{Background, PaletteColor};
use crate::stroke::StrokeId;

/// Effective changes to the stroke store. No-op operations emit nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    StrokeStarted {
        id: StrokeId,
        color: PaletteColor,
    },
    StrokeExtended {
        id: StrokeId,
        point_count: usize,
    },
    /// A stroke moved from the history onto the redo buffer
    Undone {
        id: StrokeId,
    },
    /// A stroke moved from the redo buffer back onto the history
    Redone {
        id: StrokeId,
    },
    Cleared {
        discarded_strokes: usize,
        discarded_redo: usize,
    },
    ColorChanged {
        old: PaletteColor,
        new: PaletteColor,
    },
    BackgroundToggled {
        new: Background,
    },
}
