use crate::palette::PaletteColor;
use crate::store::StrokeStore;

/// Actions the toolbar and keyboard shortcuts can trigger on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Clear,
    Undo,
    Redo,
    SetColor(PaletteColor),
    ToggleBackground,
}

impl Command {
    pub fn execute(&self, store: &mut StrokeStore) {
        log::debug!("Executing {:?}", self);
        match self {
            Command::Clear => store.clear(),
            Command::Undo => store.undo(),
            Command::Redo => store.redo(),
            Command::SetColor(color) => store.set_color(*color),
            Command::ToggleBackground => store.toggle_background(),
        }
    }

    /// Short description for tooltips
    pub fn label(&self) -> String {
        match self {
            Command::Clear => "Clear board".to_owned(),
            Command::Undo => "Undo last stroke".to_owned(),
            Command::Redo => "Redo stroke".to_owned(),
            Command::SetColor(color) => format!("Draw in {}", color),
            Command::ToggleBackground => "Toggle background".to_owned(),
        }
    }
}
