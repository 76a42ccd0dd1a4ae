use eframe::egui::{self, Color32, Painter, Pos2, Rect, TextureHandle, TextureOptions};

use crate::state::PainterState;
use crate::surface::Surface;
use crate::tools::{Brush, Tool, ToolKind};

/// Turns the painter state into pixels on screen.
///
/// The composed painting lives in one GPU texture, re-uploaded only when
/// the state's revision changes.
pub struct Renderer {
    ctx: egui::Context,
    painting: Option<TextureHandle>,
    uploaded_revision: Option<u64>,
    // Reused between uploads to avoid reallocating the frame
    frame: Option<Surface>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("uploaded_revision", &self.uploaded_revision)
            .finish_non_exhaustive()
    }
}

impl Renderer {
    pub fn new(ctx: &egui::Context) -> Self {
        Self {
            ctx: ctx.clone(),
            painting: None,
            uploaded_revision: None,
            frame: None,
        }
    }

    /// Revision of the painting currently on the GPU
    pub fn uploaded_revision(&self) -> Option<u64> {
        self.uploaded_revision
    }

    /// Composes history, canvas and overlay and uploads them if they changed
    pub fn sync(&mut self, state: &PainterState) -> &TextureHandle {
        let [width, height] = state.canvas_size();
        let upload = self.painting.is_none() || self.uploaded_revision != Some(state.revision());
        self.uploaded_revision = Some(state.revision());

        let frame = self
            .frame
            .get_or_insert_with(|| Surface::new(width, height));
        if frame.size() != state.canvas_size() {
            *frame = Surface::new(width, height);
        }

        let ctx = &self.ctx;
        let texture = self.painting.get_or_insert_with(|| {
            ctx.load_texture(
                "painting",
                egui::ColorImage::new([width, height], Color32::TRANSPARENT),
                TextureOptions::NEAREST,
            )
        });
        if upload {
            state.compose_into(frame);
            texture.set(frame.to_color_image(), TextureOptions::NEAREST);
        }
        texture
    }

    /// Draws the painting stretched over `rect`
    pub fn render_painting(&mut self, painter: &Painter, rect: Rect, state: &PainterState) {
        let texture = self.sync(state);
        let uv = Rect::from_min_max(Pos2::ZERO, egui::pos2(1.0, 1.0));
        painter.image(texture.id(), rect, uv, Color32::WHITE);
    }

    /// Draws the ghost of `tool` at `at`
    pub fn render_brush_preview(&self, painter: &Painter, at: Pos2, tool: ToolKind, brush: &Brush) {
        if let Some(shape) = tool.preview(at, brush) {
            painter.add(shape);
        }
    }
}
