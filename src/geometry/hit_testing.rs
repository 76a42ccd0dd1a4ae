use crate::action::Action;
use crate::tools::ToolKind;

use super::Point;

/// What lies under a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Inside the drawing area, in drawing-local coordinates
    Canvas(Point),
    Tool(ToolKind),
    Action(Action),
    /// Index into `palette::COLORS`
    Swatch(usize),
    /// Pane background without a control
    Chrome,
    /// Window background around the drawing area
    Nothing,
}

impl Hit {
    /// The tool whose ghost follows the pointer here, if any.
    ///
    /// Over the canvas and the size buttons that is the selected tool; over a
    /// tool button it is the hovered tool.
    pub fn preview_tool(self, selected: ToolKind) -> Option<ToolKind> {
        match self {
            Hit::Canvas(_) => Some(selected),
            Hit::Tool(kind) => Some(kind),
            Hit::Action(action) if action.previews_brush() => Some(selected),
            _ => None,
        }
    }
}
