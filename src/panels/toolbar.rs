use eframe::egui;

use crate::command::Command;
use crate::components::ColorSwatch;
use crate::palette::PaletteColor;
use crate::store::StrokeStore;

/// Bottom toolbar: clear, undo/redo, palette and background toggle.
///
/// Returns the command picked this frame, if any.
pub fn toolbar_panel(ctx: &egui::Context, store: &StrokeStore) -> Option<Command> {
    let mut picked = None;

    egui::TopBottomPanel::bottom("toolbar")
        .frame(egui::Frame::default().fill(egui::Color32::from_gray(0xdd)).inner_margin(8.0))
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 8.0;

                if ui.button("Clear").on_hover_text(Command::Clear.label()).clicked() {
                    picked = Some(Command::Clear);
                }
                if ui
                    .add_enabled(store.can_undo(), egui::Button::new("↩"))
                    .on_hover_text(Command::Undo.label())
                    .clicked()
                {
                    picked = Some(Command::Undo);
                }
                if ui
                    .add_enabled(store.can_redo(), egui::Button::new("↪"))
                    .on_hover_text(Command::Redo.label())
                    .clicked()
                {
                    picked = Some(Command::Redo);
                }

                ui.separator();

                for color in PaletteColor::ALL {
                    let swatch = ColorSwatch::new(color, store.current_color() == color);
                    if swatch.show(ui).clicked() {
                        picked = Some(Command::SetColor(color));
                    }
                }

                ui.separator();

                if ui
                    .button("◐")
                    .on_hover_text(Command::ToggleBackground.label())
                    .clicked()
                {
                    picked = Some(Command::ToggleBackground);
                }
            });
        });

    picked
}
