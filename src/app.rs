use eframe::egui;

use crate::command::Command;
use crate::config::StudioConfig;
use crate::error::StudioResult;
use crate::export::{self, SavedTo};
use crate::input::{CanvasEvent, InputHandler};
use crate::mode::ArtMode;
use crate::panels;
use crate::state::{DrawingSession, Preferences};
use crate::texture_manager::TextureManager;
use crate::util::time;

pub struct StudioApp {
    session: DrawingSession,
    textures: TextureManager,
    input: InputHandler,
    /// Width of the window, used to size new canvases
    viewport_width: f32,
    /// One-line feedback shown in the toolbar (last export, last error)
    status: Option<String>,
}

impl StudioApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: StudioConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let mut app = Self::with_session(DrawingSession::new(config));
        if let Some(storage) = cc.storage {
            if let Some(prefs) = eframe::get_value::<Preferences>(storage, eframe::APP_KEY) {
                log::debug!("Restored preferences: {:?}", prefs);
                app.session.apply_preferences(prefs);
            }
        }
        app
    }

    /// An app without an eframe context around `session`.
    pub fn with_session(session: DrawingSession) -> Self {
        Self {
            session,
            textures: TextureManager::new(),
            input: InputHandler::new(),
            viewport_width: 1024.0,
            status: None,
        }
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut DrawingSession {
        &mut self.session
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    pub fn execute_command(&mut self, command: Command) {
        log::debug!("Executing command: {:?}", command);
        match command {
            Command::EnterMode(mode) => {
                self.status = None;
                if let Err(err) = self.session.enter_mode(mode, self.viewport_width) {
                    self.report("Cannot open canvas", &err);
                }
                if self.session.mode() == ArtMode::Home {
                    self.textures.release();
                }
            }
            Command::Undo => {
                if let Err(err) = self.session.undo() {
                    self.report("Undo failed", &err);
                }
            }
            Command::Redo => {
                if let Err(err) = self.session.redo() {
                    self.report("Redo failed", &err);
                }
            }
            Command::Clear => self.session.clear(),
            Command::Export => match self.export() {
                Ok(saved) => self.status = Some(format!("Saved {}", saved)),
                Err(err) => self.report("Export failed", &err),
            },
            Command::ToggleGrid => {
                let show = !self.session.show_grid();
                self.session.set_show_grid(show);
            }
            Command::ToggleMirror => {
                let mirror = !self.session.mirror_enabled();
                self.session.set_mirror(mirror);
            }
        }
    }

    pub fn handle_canvas_events(&mut self, events: &[CanvasEvent]) {
        for event in events {
            match *event {
                CanvasEvent::PointerDown(pos) => self.session.pointer_down(pos),
                CanvasEvent::PointerMove(pos) => self.session.pointer_move(pos),
                CanvasEvent::PointerUp(pos) => self.session.pointer_up(pos),
                CanvasEvent::PointerLeave => self.session.pointer_leave(),
            }
        }
    }

    /// Texture for the current canvas, uploading it if it changed.
    pub fn canvas_texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureId> {
        let canvas = self.session.canvas()?;
        Some(self.textures.canvas_texture(ctx, canvas))
    }

    fn export(&self) -> StudioResult<SavedTo> {
        let png = self.session.export_png()?;
        let name = self.session.export_file_name(time::timestamp_millis());
        export::save_png(&name, &png, self.session.config())
    }

    fn report(&mut self, what: &str, err: &crate::error::StudioError) {
        log::error!("{}: {}", what, err);
        self.status = Some(format!("{}: {}", what, err));
    }
}

impl eframe::App for StudioApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.session.preferences());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.viewport_width = ctx.screen_rect().width();

        if self.session.mode() == ArtMode::Home {
            panels::home_panel(self, ctx);
            return;
        }

        for command in self.input.shortcut_commands(ctx) {
            self.execute_command(command);
        }

        panels::toolbar_panel(self, ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
