use eframe::egui;

/// Square icon button with a highlighted selected state.
pub struct ToolButton {
    pub icon: &'static str,
    pub tooltip: &'static str,
    pub selected: bool,
    pub accent: egui::Color32,
}

impl ToolButton {
    pub fn new(icon: &'static str, tooltip: &'static str, selected: bool) -> Self {
        Self {
            icon,
            tooltip,
            selected,
            accent: egui::Color32::from_rgb(59, 130, 246),
        }
    }

    pub fn accent(mut self, accent: egui::Color32) -> Self {
        self.accent = accent;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let width = if self.icon.chars().count() > 1 { 44.0 } else { 32.0 };
        let (rect, response) = ui.allocate_exact_size(egui::vec2(width, 32.0), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                self.accent.gamma_multiply(0.25)
            } else if response.hovered() {
                ui.visuals().widgets.hovered.bg_fill
            } else {
                ui.visuals().widgets.inactive.bg_fill
            };
            ui.painter().rect_filled(rect, 6.0, bg_color);

            let font_id = egui::FontId::proportional(if width > 32.0 { 14.0 } else { 20.0 });
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.icon,
                font_id,
                ui.visuals().text_color(),
            );

            let border = if self.selected {
                egui::Stroke::new(2.0, self.accent)
            } else {
                ui.visuals().widgets.inactive.bg_stroke
            };
            ui.painter().rect_stroke(rect, 6.0, border);
        }

        response.on_hover_text(self.tooltip)
    }
}
