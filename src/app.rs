use eframe::egui;

use crate::command::Command;
use crate::config::BoardConfig;
use crate::event::EventLogger;
use crate::input::{GestureTracker, InputHandler};
use crate::panels;
use crate::renderer::Renderer;
use crate::store::StrokeStore;

/// The drawing board application: a canvas above a toolbar.
///
/// Nothing is persisted, the drawing lives only as long as the window.
#[derive(Debug)]
pub struct SketchApp {
    pub(crate) store: StrokeStore,
    pub(crate) renderer: Renderer,
    pub(crate) input_handler: InputHandler,
    pub(crate) tracker: GestureTracker,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(&BoardConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &BoardConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: &BoardConfig) -> Self {
        let mut store = StrokeStore::with_config(config);
        store.subscribe(Box::new(EventLogger::new()));

        Self {
            store,
            renderer: Renderer::new(config),
            input_handler: InputHandler::new(),
            tracker: GestureTracker::new(),
        }
    }

    pub fn store(&self) -> &StrokeStore {
        &self.store
    }

    pub fn execute_command(&mut self, command: Command) {
        command.execute(&mut self.store);
    }

    fn shortcut_command(ctx: &egui::Context) -> Option<Command> {
        use egui::{Key, KeyboardShortcut, Modifiers};

        let redo_shift = KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z);
        let redo_y = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
        let undo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

        // Check the shifted shortcut first, plain Cmd+Z would also match it
        ctx.input_mut(|input| {
            if input.consume_shortcut(&redo_shift) || input.consume_shortcut(&redo_y) {
                Some(Command::Redo)
            } else if input.consume_shortcut(&undo) {
                Some(Command::Undo)
            } else {
                None
            }
        })
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(command) = Self::shortcut_command(ctx) {
            self.execute_command(command);
        }

        // Toolbar first so the canvas gets the remaining space
        if let Some(command) = panels::toolbar_panel(ctx, &self.store) {
            self.execute_command(command);
        }

        panels::central_panel(self, ctx);
    }
}
