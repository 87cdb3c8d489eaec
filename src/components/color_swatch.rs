use eframe::egui;

/// A clickable colour square; the selected one is drawn larger with a dark border.
pub fn color_swatch(ui: &mut egui::Ui, color: egui::Color32, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(28.0, 28.0), egui::Sense::click());
    if ui.is_rect_visible(rect) {
        let grow = if selected || response.hovered() { 1.5 } else { 0.0 };
        let swatch = rect.shrink(2.0 - grow);
        ui.painter().rect_filled(swatch, 6.0, color);
        let border = if selected {
            egui::Stroke::new(2.0, egui::Color32::from_gray(40))
        } else {
            egui::Stroke::new(1.0, egui::Color32::from_gray(200))
        };
        ui.painter().rect_stroke(swatch, 6.0, border);
    }
    response
}
