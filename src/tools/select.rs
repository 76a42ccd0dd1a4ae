use egui::{Color32, Pos2, Shape};

use super::{Brush, Mark, MarkTarget, Tool};
use crate::geometry::PixelRect;
use crate::surface::Surface;

pub const SELECTION_OUTLINE: Color32 = Color32::BLACK;

/// Rectangular selection. Draws only an outline on the overlay; the
/// finished rectangle is recorded by the gesture, nothing is copied yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectTool;

impl SelectTool {
    /// The outline drawn for a drag from `mark.start` to `mark.position`,
    /// or `None` while the drag spans no area
    pub fn selection_rect(mark: &Mark) -> Option<PixelRect> {
        if mark.start.x == mark.position.x || mark.start.y == mark.position.y {
            return None;
        }
        Some(PixelRect::spanning(mark.start, mark.position))
    }
}

impl Tool for SelectTool {
    fn name(&self) -> &'static str {
        "Select"
    }

    fn target(&self) -> MarkTarget {
        MarkTarget::Overlay
    }

    fn apply(&self, surface: &mut Surface, mark: &Mark) {
        if let Some(rect) = Self::selection_rect(mark) {
            surface.stroke_rect(rect, 1, SELECTION_OUTLINE);
        }
    }

    fn preview(&self, _at: Pos2, _brush: &Brush) -> Option<Shape> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::BrushSize;
    use crate::geometry::Point;

    fn mark(start: Point, position: Point) -> Mark {
        Mark {
            start,
            position,
            brush: Brush {
                size: BrushSize::new(15),
                color: Color32::RED,
                eraser: Color32::WHITE,
            },
        }
    }

    #[test]
    fn test_outline_spans_drag_in_any_direction() {
        let mut surface = Surface::new(30, 30);
        SelectTool.apply(&mut surface, &mark(Point::new(20, 20), Point::new(5, 10)));

        assert_eq!(surface.get(Point::new(5, 10)), Some(SELECTION_OUTLINE));
        assert_eq!(surface.get(Point::new(19, 19)), Some(SELECTION_OUTLINE));
        assert_eq!(surface.get(Point::new(12, 15)), Some(Color32::TRANSPARENT));
        assert!(!surface.pixels().contains(&Color32::RED));
    }

    #[test]
    fn test_degenerate_drag_draws_nothing() {
        let mut surface = Surface::new(30, 30);
        SelectTool.apply(&mut surface, &mark(Point::new(5, 5), Point::new(5, 20)));
        assert!(surface.is_uniform(Color32::TRANSPARENT));
    }
}
