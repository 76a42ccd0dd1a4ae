use egui::{Pos2, Shape};

use super::{Brush, Mark, Tool};
use crate::surface::Surface;

/// Filled disk, radius = brush size, centered on the pointer
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleTool;

impl Tool for CircleTool {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn apply(&self, surface: &mut Surface, mark: &Mark) {
        surface.fill_circle(mark.position, mark.brush.size.pixels(), mark.brush.color);
    }

    fn preview(&self, at: Pos2, brush: &Brush) -> Option<Shape> {
        Some(Shape::circle_filled(at, brush.size.get() as f32, brush.color))
    }
}
