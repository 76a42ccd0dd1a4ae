use eframe::egui;

use super::pane_frame;
use crate::components::ColorSwatch;
use crate::layout::ChromeLayout;
use crate::palette::COLORS;
use crate::state::PainterState;

/// Bottom pane: two rows of color swatches. Sweeping over swatches with the
/// button held picks each one in turn.
pub fn palette_panel(ctx: &egui::Context, layout: &ChromeLayout, state: &mut PainterState) {
    egui::TopBottomPanel::bottom("palette_pane")
        .exact_height(layout.bottom_pane.height())
        .show_separator_line(false)
        .frame(pane_frame())
        .show(ctx, |ui| {
            let primary_down = ui.input(|i| i.pointer.primary_down());
            for (&color, &rect) in COLORS.iter().zip(layout.swatches()) {
                let response = ColorSwatch::new(color, state.color() == color).show(ui, rect);
                let picked = response.clicked() || (primary_down && response.contains_pointer());
                if picked && !state.is_drawing() && state.color() != color {
                    state.select_color(color);
                }
            }
        });
}
