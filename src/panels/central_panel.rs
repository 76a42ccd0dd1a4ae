use eframe::egui;

use crate::input::InputHandler;
use crate::layout::ChromeLayout;
use crate::palette::{BACKGROUND_COLOR, DRAWING_AREA_COLOR};
use crate::renderer::Renderer;
use crate::state::PainterState;

/// Drawing area: feeds pointer input to the stroke gesture, then draws the
/// painting
pub fn central_panel(
    ctx: &egui::Context,
    layout: &ChromeLayout,
    state: &mut PainterState,
    renderer: &mut Renderer,
    input: &mut InputHandler,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(BACKGROUND_COLOR))
        .show(ctx, |ui| {
            let canvas_rect = layout.drawing_area;
            ui.allocate_rect(canvas_rect, egui::Sense::click_and_drag());

            let sample = ctx.input(|i| input.pointer_sample(i, layout));
            state.handle_pointer(&sample);

            let painter = ui.painter_at(canvas_rect);
            painter.rect_filled(canvas_rect, 0.0, DRAWING_AREA_COLOR);
            renderer.render_painting(&painter, canvas_rect, state);
        });
}
