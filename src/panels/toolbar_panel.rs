use eframe::egui::{self, RichText};

use crate::StudioApp;
use crate::command::Command;
use crate::mode::ArtMode;

fn bar_button(ui: &mut egui::Ui, enabled: bool, icon: &str, command: Command, pending: &mut Vec<Command>) {
    let text = format!("{} {}", icon, command.label());
    let button = egui::Button::new(RichText::new(text).color(egui::Color32::WHITE).strong())
        .fill(egui::Color32::from_white_alpha(40))
        .rounding(10.0);
    if ui.add_enabled(enabled, button).clicked() {
        pending.push(command);
    }
}

/// Header bar: home, mode title, history and canvas actions.
pub fn toolbar_panel(app: &mut StudioApp, ctx: &egui::Context) {
    let mode = app.session().mode();
    let mut pending = Vec::new();

    egui::TopBottomPanel::top("toolbar")
        .frame(
            egui::Frame::default()
                .fill(mode.accent())
                .inner_margin(egui::Margin::symmetric(16.0, 10.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                bar_button(ui, true, "🏠", Command::EnterMode(ArtMode::Home), &mut pending);
                ui.label(
                    RichText::new(mode.display_name())
                        .heading()
                        .strong()
                        .color(egui::Color32::WHITE),
                );
                ui.add_space(24.0);

                let history = app.session().history();
                bar_button(ui, history.can_undo(), "⟲", Command::Undo, &mut pending);
                bar_button(ui, history.can_redo(), "⟳", Command::Redo, &mut pending);
                if mode == ArtMode::Zentangle {
                    let icon = if app.session().show_grid() { "▦ ✔" } else { "▦" };
                    bar_button(ui, true, icon, Command::ToggleGrid, &mut pending);
                }
                bar_button(ui, true, "🗑", Command::Clear, &mut pending);
                bar_button(ui, true, "💾", Command::Export, &mut pending);

                if let Some(status) = app.status() {
                    ui.add_space(16.0);
                    ui.label(RichText::new(status).color(egui::Color32::WHITE).small());
                }
            });
        });

    for command in pending {
        app.execute_command(command);
    }
}
