use eframe::egui::{self, RichText};

use crate::StudioApp;
use crate::command::Command;
use crate::mode::ArtMode;

const CARD_WIDTH: f32 = 230.0;

fn mode_card(ui: &mut egui::Ui, mode: ArtMode) -> bool {
    let accent = mode.accent();
    let frame = egui::Frame::group(ui.style())
        .fill(egui::Color32::WHITE)
        .rounding(16.0)
        .inner_margin(16.0)
        .stroke(egui::Stroke::new(1.5, accent.gamma_multiply(0.4)));

    let inner = frame.show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            ui.label(RichText::new(mode.card_title()).heading().strong().color(accent));
            ui.add_space(6.0);
            ui.label(mode.blurb());
            ui.add_space(6.0);
            ui.label(RichText::new("Features:").strong().small().color(accent));
            ui.label(RichText::new(mode.features()).small());
            ui.add_space(8.0);
            ui.button(RichText::new("Start").strong()).clicked()
        })
        .inner
    });

    let card = inner.response.interact(egui::Sense::click());
    inner.inner || card.on_hover_cursor(egui::CursorIcon::PointingHand).clicked()
}

/// Mode picker shown before any canvas exists.
pub fn home_panel(app: &mut StudioApp, ctx: &egui::Context) {
    let mut chosen = None;

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(egui::Color32::from_rgb(245, 240, 255)).inner_margin(32.0))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.label(
                        RichText::new("Artisan Studio")
                            .size(48.0)
                            .strong()
                            .color(egui::Color32::from_rgb(147, 51, 234)),
                    );
                    ui.label(RichText::new("Create Beautiful Art with Digital Tools").size(22.0));
                    ui.label(
                        "Choose from Zentangles, Mandalas, Stencil Art, or free-form drawing.",
                    );
                    ui.add_space(32.0);
                });

                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(20.0, 20.0);
                    for mode in ArtMode::DRAWING_MODES {
                        if mode_card(ui, mode) {
                            chosen = Some(mode);
                        }
                    }
                });
            });
        });

    if let Some(mode) = chosen {
        app.execute_command(Command::EnterMode(mode));
    }
}
