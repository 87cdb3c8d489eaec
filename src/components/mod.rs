mod color_swatch;
mod tool_button;

pub use color_swatch::color_swatch;
pub use tool_button::ToolButton;
