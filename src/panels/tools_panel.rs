use eframe::egui;

use super::pane_frame;
use crate::components::{ActionButton, ToolButton};
use crate::icons::IconSet;
use crate::layout::ChromeLayout;
use crate::state::PainterState;
use crate::tools::Tool;

/// Left pane: tool grid, then the actions grid below it
pub fn tools_panel(ctx: &egui::Context, layout: &ChromeLayout, state: &mut PainterState, icons: &IconSet) {
    egui::SidePanel::left("tools_panel")
        .exact_width(layout.left_pane.width())
        .resizable(false)
        .show_separator_line(false)
        .frame(pane_frame())
        .show(ctx, |ui| {
            for &(tool, rect) in layout.tool_buttons() {
                let button = ToolButton::new(tool, icons.get(tool), state.tool() == tool);
                if button.show(ui, rect).clicked() {
                    log::info!("Tool selected from UI: {}", tool.name());
                    state.select_tool(tool);
                }
            }

            for &(action, rect) in layout.action_buttons() {
                if ActionButton::new(action).show(ui, rect).clicked() {
                    log::debug!("Action: {:?}", action);
                    state.apply_action(action);
                }
            }
        });
}
