use eframe::egui;

use super::pane_frame;
use crate::layout::ChromeLayout;
use crate::palette::color_name;
use crate::state::PainterState;
use crate::tools::Tool;

/// Status strip: current tool, size, color and history depth
pub fn top_panel(ctx: &egui::Context, layout: &ChromeLayout, state: &PainterState) {
    egui::TopBottomPanel::top("top_pane")
        .exact_height(layout.top_pane.height())
        .show_separator_line(false)
        .frame(pane_frame().inner_margin(egui::Margin::symmetric(8.0, 0.0)))
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(format!("Tool: {}", state.tool().name()));
                ui.separator();
                ui.label(format!("Size: {}", state.size().get()));
                ui.separator();
                ui.label(format!("Color: {}", color_name(state.color())));
                ui.separator();
                let history = state.history();
                ui.label(format!("History: {}/{}", history.len(), history.capacity()));
                if let Some(selection) = state.selection() {
                    ui.separator();
                    ui.label(format!(
                        "Selection: {}x{} at ({}, {})",
                        selection.width, selection.height, selection.x, selection.y
                    ));
                }
            });
        });
}
