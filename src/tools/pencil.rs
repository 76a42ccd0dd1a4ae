use egui::{Pos2, Shape};

use super::{Brush, Mark, Tool};
use crate::surface::Surface;

/// A single pixel under the pointer. The brush size does not apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct PencilTool;

impl Tool for PencilTool {
    fn name(&self) -> &'static str {
        "Pencil"
    }

    fn apply(&self, surface: &mut Surface, mark: &Mark) {
        surface.set(mark.position, mark.brush.color);
    }

    fn preview(&self, at: Pos2, brush: &Brush) -> Option<Shape> {
        let rect = egui::Rect::from_min_size(at, egui::vec2(1.0, 1.0));
        Some(Shape::rect_filled(rect, 0.0, brush.color))
    }
}
