use egui::{Context, TextureHandle, TextureId, TextureOptions};

use crate::canvas::Canvas;

/// Keeps one GPU texture in sync with the canvas, re-uploading only when the
/// canvas version changes.
#[derive(Default)]
pub struct TextureManager {
    handle: Option<TextureHandle>,
    uploaded_version: Option<u64>,
    uploads: u64,
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture showing the canvas's current composite.
    pub fn canvas_texture(&mut self, ctx: &Context, canvas: &Canvas) -> TextureId {
        let version = canvas.version();
        if let Some(handle) = &self.handle {
            if self.uploaded_version == Some(version) {
                return handle.id();
            }
        }

        let image = canvas.to_color_image();
        let id = if let Some(handle) = self.handle.as_mut() {
            handle.set(image, TextureOptions::LINEAR);
            handle.id()
        } else {
            let handle = ctx.load_texture("canvas", image, TextureOptions::LINEAR);
            let id = handle.id();
            self.handle = Some(handle);
            id
        };
        self.uploaded_version = Some(version);
        self.uploads += 1;
        id
    }

    /// Number of uploads so far.
    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    /// Drop the texture (e.g. when leaving the canvas for the home screen).
    pub fn release(&mut self) {
        self.handle = None;
        self.uploaded_version = None;
    }
}
