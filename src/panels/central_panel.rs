use eframe::egui;

use crate::SketchApp;

/// The drawing surface: routes drag gestures into the store and paints the result
pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());

            for event in app.input_handler.process_response(&response) {
                app.tracker.handle_event(&event, &mut app.store);
            }

            app.renderer.paint(&painter, response.rect, &app.store);
        });
}
