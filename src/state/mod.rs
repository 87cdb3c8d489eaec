mod editor_state;
mod session;

use serde::{Deserialize, Serialize};

use crate::brush::BrushSettings;

pub use editor_state::EditorState;
pub use session::{DrawingSession, FILL_SQUARE};

/// Tool preferences restored between runs. Artwork is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub brush: BrushSettings,
    pub show_grid: bool,
    pub mirror: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            brush: BrushSettings::default(),
            show_grid: false,
            mirror: true,
        }
    }
}
