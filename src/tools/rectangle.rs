use egui::{Pos2, Shape};

use super::{centered_square_rect, Brush, Mark, Tool};
use crate::geometry::PixelRect;
use crate::surface::Surface;

/// Filled square, side = brush size, centered on the pointer
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleTool;

impl Tool for RectangleTool {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn apply(&self, surface: &mut Surface, mark: &Mark) {
        let square = PixelRect::centered_square(mark.position, mark.brush.size.pixels());
        surface.fill_rect(square, mark.brush.color);
    }

    fn preview(&self, at: Pos2, brush: &Brush) -> Option<Shape> {
        Some(Shape::rect_filled(centered_square_rect(at, brush.size), 0.0, brush.color))
    }
}
