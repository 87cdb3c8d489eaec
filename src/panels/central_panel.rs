use eframe::egui;

use crate::StudioApp;

pub fn central_panel(app: &mut StudioApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(egui::Color32::from_gray(248)).inner_margin(16.0))
        .show(ctx, |ui| {
            let Some(size) = app.session().canvas().map(|canvas| canvas.size()) else {
                return;
            };

            // Fit the canvas into the panel, never scaling it up
            let available = ui.available_size();
            let canvas_size = egui::vec2(size.width as f32, size.height as f32);
            let scale = (available.x / canvas_size.x)
                .min(available.y / canvas_size.y)
                .clamp(0.1, 1.0);
            let (response, painter) = ui.allocate_painter(available, egui::Sense::drag());
            let canvas_rect = egui::Rect::from_center_size(response.rect.center(), canvas_size * scale);

            let input = app.input_mut();
            input.set_canvas(canvas_rect, size);
            let events = input.process_input(ctx, &response);
            app.handle_canvas_events(&events);

            if let Some(texture) = app.canvas_texture(ctx) {
                painter.rect_filled(canvas_rect.expand(6.0), 12.0, egui::Color32::WHITE);
                painter.image(
                    texture,
                    canvas_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
                painter.rect_stroke(
                    canvas_rect.expand(1.0),
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_gray(220)),
                );
            }

            if response
                .hover_pos()
                .is_some_and(|pos| canvas_rect.contains(pos))
            {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        });
}
