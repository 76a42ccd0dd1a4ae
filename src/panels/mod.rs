mod central_panel;
mod palette_panel;
mod tools_panel;
mod top_panel;

pub use central_panel::central_panel;
pub use palette_panel::palette_panel;
pub use tools_panel::tools_panel;
pub use top_panel::top_panel;

use eframe::egui;

use crate::palette::PANE_COLOR;

/// Flat gray pane background without egui's default margins
pub(crate) fn pane_frame() -> egui::Frame {
    egui::Frame::none().fill(PANE_COLOR)
}
