use egui::{Pos2, Shape};

use super::{centered_square_rect, Brush, Mark, Tool};
use crate::geometry::PixelRect;
use crate::surface::Surface;

/// A square like `RectangleTool`, painted in the background color
#[derive(Debug, Clone, Copy, Default)]
pub struct EraserTool;

impl Tool for EraserTool {
    fn name(&self) -> &'static str {
        "Eraser"
    }

    fn apply(&self, surface: &mut Surface, mark: &Mark) {
        let square = PixelRect::centered_square(mark.position, mark.brush.size.pixels());
        surface.fill_rect(square, mark.brush.eraser);
    }

    fn preview(&self, at: Pos2, brush: &Brush) -> Option<Shape> {
        Some(Shape::rect_filled(centered_square_rect(at, brush.size), 0.0, brush.eraser))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::BrushSize;
    use crate::geometry::Point;
    use egui::Color32;

    #[test]
    fn test_eraser_ignores_foreground_color() {
        let mut surface = Surface::filled(10, 10, Color32::BLACK);
        let mark = Mark {
            start: Point::new(5, 5),
            position: Point::new(5, 5),
            brush: Brush {
                size: BrushSize::new(2),
                color: Color32::RED,
                eraser: Color32::WHITE,
            },
        };

        EraserTool.apply(&mut surface, &mark);

        assert_eq!(surface.get(Point::new(4, 4)), Some(Color32::WHITE));
        assert_eq!(surface.get(Point::new(5, 5)), Some(Color32::WHITE));
        assert_eq!(surface.get(Point::new(6, 6)), Some(Color32::BLACK));
        assert!(!surface.pixels().contains(&Color32::RED));
    }
}
