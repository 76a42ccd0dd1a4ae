use egui::{Color32, Pos2, Shape};
use serde::{Deserialize, Serialize};

use crate::brush::BrushSize;
use crate::geometry::Point;
use crate::surface::Surface;

mod circle;
mod eraser;
mod pencil;
mod rectangle;
mod select;

pub use circle::CircleTool;
pub use eraser::EraserTool;
pub use pencil::PencilTool;
pub use rectangle::RectangleTool;
pub use select::SelectTool;

/// Which buffer a tool draws into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkTarget {
    /// The live canvas, committed to history when the stroke ends
    Canvas,
    /// The transient overlay, never committed
    Overlay,
}

/// Paint parameters shared by every tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub size: BrushSize,
    pub color: Color32,
    /// Color the eraser paints with (the canvas background)
    pub eraser: Color32,
}

/// One rasterization of a tool during a gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mark {
    /// Where the gesture started, in drawing-local coordinates
    pub start: Point,
    /// Where the pointer is now
    pub position: Point,
    pub brush: Brush,
}

/// A drawing tool: rasterizes marks and describes its brush ghost
pub trait Tool {
    fn name(&self) -> &'static str;

    fn target(&self) -> MarkTarget {
        MarkTarget::Canvas
    }

    /// Rasterize one mark onto `surface`
    fn apply(&self, surface: &mut Surface, mark: &Mark);

    /// The ghost drawn under the cursor at screen position `at`, if any
    fn preview(&self, at: Pos2, brush: &Brush) -> Option<Shape>;
}

/// Every tool on the toolbar, in toolbar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Circle,
    Rectangle,
    Eraser,
    Pencil,
    Select,
}

impl ToolKind {
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Circle,
        ToolKind::Rectangle,
        ToolKind::Eraser,
        ToolKind::Pencil,
        ToolKind::Select,
    ];

    /// Position on the toolbar, starting at 1; icons are named after it
    pub fn icon_index(self) -> usize {
        match self {
            Self::Circle => 1,
            Self::Rectangle => 2,
            Self::Eraser => 3,
            Self::Pencil => 4,
            Self::Select => 5,
        }
    }

    pub fn from_icon_index(index: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.icon_index() == index)
    }

    /// True when a finished gesture with this tool becomes a history entry
    pub fn commits(self) -> bool {
        self.target() == MarkTarget::Canvas
    }
}

impl Tool for ToolKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Circle => CircleTool.name(),
            Self::Rectangle => RectangleTool.name(),
            Self::Eraser => EraserTool.name(),
            Self::Pencil => PencilTool.name(),
            Self::Select => SelectTool.name(),
        }
    }

    fn target(&self) -> MarkTarget {
        match self {
            Self::Circle => CircleTool.target(),
            Self::Rectangle => RectangleTool.target(),
            Self::Eraser => EraserTool.target(),
            Self::Pencil => PencilTool.target(),
            Self::Select => SelectTool.target(),
        }
    }

    fn apply(&self, surface: &mut Surface, mark: &Mark) {
        match self {
            Self::Circle => CircleTool.apply(surface, mark),
            Self::Rectangle => RectangleTool.apply(surface, mark),
            Self::Eraser => EraserTool.apply(surface, mark),
            Self::Pencil => PencilTool.apply(surface, mark),
            Self::Select => SelectTool.apply(surface, mark),
        }
    }

    fn preview(&self, at: Pos2, brush: &Brush) -> Option<Shape> {
        match self {
            Self::Circle => CircleTool.preview(at, brush),
            Self::Rectangle => RectangleTool.preview(at, brush),
            Self::Eraser => EraserTool.preview(at, brush),
            Self::Pencil => PencilTool.preview(at, brush),
            Self::Select => SelectTool.preview(at, brush),
        }
    }
}

/// Screen-space square matching `PixelRect::centered_square`
pub(crate) fn centered_square_rect(at: Pos2, size: BrushSize) -> egui::Rect {
    let side = size.pixels();
    let min = egui::pos2(at.x - (side / 2) as f32, at.y - (side / 2) as f32);
    egui::Rect::from_min_size(min, egui::vec2(side as f32, side as f32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_indices_are_one_based_and_unique() {
        for (i, kind) in ToolKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.icon_index(), i + 1);
            assert_eq!(ToolKind::from_icon_index(i + 1), Some(kind));
        }
        assert_eq!(ToolKind::from_icon_index(0), None);
        assert_eq!(ToolKind::from_icon_index(6), None);
    }

    #[test]
    fn test_only_select_skips_commit() {
        for kind in ToolKind::ALL {
            assert_eq!(kind.commits(), kind != ToolKind::Select, "{}", kind.name());
        }
    }
}
