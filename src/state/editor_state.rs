//! What the pointer is doing on the canvas.
//!
//! ```text
//!            press (brush)          release / leave
//!   Idle ─────────────────► Drawing ───────────────► Idle
//!     │                                               ▲
//!     │      press (shape)          release / leave   │
//!     └───────────────────► Shaping ──────────────────┘
//! ```
//!
//! A press in fill mode paints immediately and never leaves `Idle`.

use eframe::egui::Pos2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    /// Freehand stroke in progress; `last` is the previous pointer position
    Drawing { last: Pos2 },
    /// Shape drag in progress
    Shaping { start: Pos2, current: Pos2 },
}

impl EditorState {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorState::Drawing { .. })
    }

    pub fn is_shaping(&self) -> bool {
        matches!(self, EditorState::Shaping { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditorState::Idle => "Idle",
            EditorState::Drawing { .. } => "Drawing",
            EditorState::Shaping { .. } => "Shaping",
        }
    }
}
