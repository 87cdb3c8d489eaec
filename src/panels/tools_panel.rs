use eframe::egui::{self, RichText};

use crate::StudioApp;
use crate::brush::{self, BrushType, ShapeType};
use crate::command::Command;
use crate::components::{ToolButton, color_swatch};
use crate::mode::ArtMode;

pub fn tools_panel(app: &mut StudioApp, ctx: &egui::Context) {
    let mode = app.session().mode();
    let max_size = app.session().config().max_brush_size;
    let mut pending = Vec::new();

    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("Drawing Tools");
            ui.add_space(4.0);

            let brush = app.session_mut().brush_mut();

            ui.horizontal_wrapped(|ui| {
                for brush_type in BrushType::ALL {
                    let selected = brush.brush_type == brush_type;
                    if ToolButton::new(brush_type.icon(), brush_type.name(), selected)
                        .show(ui)
                        .clicked()
                    {
                        log::info!("Brush selected: {}", brush_type.name());
                        brush.brush_type = brush_type;
                    }
                }
            });

            ui.horizontal_wrapped(|ui| {
                for shape in ShapeType::ALL {
                    let selected = brush.shape == shape;
                    if ToolButton::new(shape.icon(), shape.name(), selected)
                        .accent(egui::Color32::from_rgb(34, 197, 94))
                        .show(ui)
                        .clicked()
                    {
                        log::info!("Shape selected: {}", shape.name());
                        brush.shape = shape;
                    }
                }
            });

            ui.toggle_value(&mut brush.fill_mode, "💧 Fill");
            ui.separator();

            ui.label(format!("Brush Size: {}px", brush.size));
            let mut size = brush.size;
            if ui.add(egui::Slider::new(&mut size, 1..=max_size).show_value(false)).changed() {
                brush.set_size(size, max_size);
            }

            ui.horizontal(|ui| {
                ui.label("Color");
                egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut brush.color,
                    egui::color_picker::Alpha::Opaque,
                );
                ui.label(RichText::new(brush::to_hex(brush.color)).monospace().weak());
            });

            egui::Grid::new("palette_grid")
                .num_columns(4)
                .spacing([6.0, 6.0])
                .show(ui, |ui| {
                    for (i, hex) in brush::PALETTE.iter().enumerate() {
                        let Ok(color) = brush::parse_hex_color(hex) else {
                            continue;
                        };
                        if color_swatch(ui, color, brush.color == color)
                            .on_hover_text(*hex)
                            .clicked()
                        {
                            brush.color = color;
                        }
                        if i % 4 == 3 {
                            ui.end_row();
                        }
                    }
                });

            if mode == ArtMode::Mandala {
                ui.separator();
                let mut mirror = app.session().mirror_enabled();
                if ui.checkbox(&mut mirror, "Auto-mirror").changed() {
                    pending.push(Command::ToggleMirror);
                }
            }

            ui.separator();
            egui::Frame::group(ui.style())
                .fill(mode.accent().gamma_multiply(0.12))
                .show(ui, |ui| {
                    ui.label(RichText::new("Tips:").strong().color(mode.accent()));
                    ui.label(RichText::new(mode.tip()).small());
                });

            ui.separator();
            let history = app.session().history();
            ui.label(
                RichText::new(format!(
                    "History: {}/{}  ·  Redo: {}",
                    history.undo_len(),
                    history.capacity(),
                    history.redo_len()
                ))
                .small()
                .weak(),
            );
        });

    for command in pending {
        app.execute_command(command);
    }
}
