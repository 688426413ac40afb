use eframe::egui;
use crate::palette::PaletteColor;

const SWATCH_SIZE: f32 = 24.0;

/// Round palette button; the selected color gets a gray ring, a hovered one a light gray ring
pub struct ColorSwatch {
    pub color: PaletteColor,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: PaletteColor, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(SWATCH_SIZE + 4.0, SWATCH_SIZE + 4.0);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = SWATCH_SIZE / 2.0;
            let painter = ui.painter();
            painter.circle_filled(rect.center(), radius, self.color.to_color32());

            let ring = if self.selected {
                egui::Color32::GRAY
            } else if response.hovered() {
                egui::Color32::from_gray(180)
            } else {
                egui::Color32::TRANSPARENT
            };
            painter.circle_stroke(rect.center(), radius, egui::Stroke::new(2.0, ring));
        }

        response.on_hover_text(self.color.name())
    }
}
