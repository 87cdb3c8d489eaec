use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::StudioResult;

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "ARTISAN_STUDIO_CONFIG";

/// Tunables for the studio. Every field has a default, so a config file
/// only needs to name the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Maximum number of undo snapshots kept
    pub history_capacity: usize,
    pub max_brush_size: u32,
    pub default_brush_size: u32,
    /// Zentangle grid spacing in pixels
    pub grid_spacing: u32,
    /// Canvas size used when the viewport is at least `narrow_breakpoint` wide
    pub wide_canvas: [u32; 2],
    pub narrow_canvas_height: u32,
    pub narrow_breakpoint: u32,
    /// Number of rotations used by mandala auto-mirroring
    pub mandala_folds: u32,
    /// Directory exported PNGs are written to (native only)
    pub export_dir: PathBuf,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            history_capacity: 21,
            max_brush_size: 40,
            default_brush_size: 3,
            grid_spacing: 30,
            wide_canvas: [800, 600],
            narrow_canvas_height: 400,
            narrow_breakpoint: 700,
            mandala_folds: 12,
            export_dir: PathBuf::from("."),
        }
    }
}

impl StudioConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> StudioResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        Ok(config.sanitized())
    }

    /// Load the configuration named by `ARTISAN_STUDIO_CONFIG`, falling back
    /// to defaults when the variable is unset.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> StudioResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                let path = PathBuf::from(path);
                log::info!("Loading configuration from {}", path.display());
                let text = std::fs::read_to_string(&path)?;
                Self::from_json(&text)
            }
            None => Ok(Self::default()),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> StudioResult<Self> {
        Ok(Self::default())
    }

    /// Clamp values that would make the canvas or tools unusable.
    fn sanitized(mut self) -> Self {
        self.history_capacity = self.history_capacity.max(1);
        self.max_brush_size = self.max_brush_size.max(1);
        self.default_brush_size = self.default_brush_size.clamp(1, self.max_brush_size);
        self.grid_spacing = self.grid_spacing.max(1);
        self.wide_canvas = [self.wide_canvas[0].max(1), self.wide_canvas[1].max(1)];
        self.narrow_canvas_height = self.narrow_canvas_height.max(1);
        self.mandala_folds = self.mandala_folds.max(1);
        self
    }
}
