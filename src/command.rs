use crate::mode::ArtMode;

/// Actions the panels and keyboard shortcuts ask the app to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch screens; `ArtMode::Home` returns to the mode picker
    EnterMode(ArtMode),
    Undo,
    Redo,
    /// Wipe the canvas back to its guides and drop the history
    Clear,
    /// Save the canvas as a PNG
    Export,
    ToggleGrid,
    ToggleMirror,
}

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Command::EnterMode(ArtMode::Home) => "Home",
            Command::EnterMode(_) => "Enter mode",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Clear => "Clear",
            Command::Export => "Save",
            Command::ToggleGrid => "Grid",
            Command::ToggleMirror => "Auto-mirror",
        }
    }
}
