mod action_button;
mod color_swatch;
mod tool_button;

pub use action_button::ActionButton;
pub use color_swatch::ColorSwatch;
pub use tool_button::ToolButton;
