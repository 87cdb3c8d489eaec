#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod canvas;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod guides;
pub mod history;
pub mod input;
pub mod mode;
pub mod panels;
pub mod shapes;
pub mod state;
pub mod symmetry;
pub mod texture_manager;
pub mod util;

pub use app::StudioApp;
pub use brush::{BrushSettings, BrushType, ShapeType};
pub use canvas::{Canvas, CanvasSize, Snapshot};
pub use command::Command;
pub use config::StudioConfig;
pub use error::{StudioError, StudioResult};
pub use history::SnapshotHistory;
pub use input::{CanvasEvent, InputHandler};
pub use mode::ArtMode;
pub use state::{DrawingSession, EditorState, Preferences};
