use egui::{pos2, vec2, Pos2, Rect};
use serde::{Deserialize, Serialize};

use crate::action::{Action, ACTION_SLOTS};
use crate::error::{PaintError, PaintResult};
use crate::geometry::{Hit, Point};
use crate::palette::{COLORS, COLORS_PER_ROW};
use crate::tools::ToolKind;

/// Pixel sizes of the window chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeMetrics {
    pub top_pane_height: usize,
    pub bottom_pane_height: usize,
    pub left_pane_width: usize,
    pub drawing_area_margin: usize,
    pub tool_pane_margin: usize,
    pub button_size: usize,
    /// Vertical distance from the top pane to the actions grid
    pub actions_offset: usize,
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self {
            top_pane_height: 24,
            bottom_pane_height: 68,
            left_pane_width: 68,
            drawing_area_margin: 10,
            tool_pane_margin: 4,
            button_size: 30,
            actions_offset: 200,
        }
    }
}

/// Screen rectangles of every pane and control, for a fixed window size
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeLayout {
    pub window: Rect,
    pub top_pane: Rect,
    pub left_pane: Rect,
    pub bottom_pane: Rect,
    pub drawing_area: Rect,
    canvas_size: [usize; 2],
    tool_buttons: Vec<(ToolKind, Rect)>,
    action_buttons: Vec<(Action, Rect)>,
    swatches: Vec<Rect>,
}

/// Two-column grid where neighbouring buttons share their 1px border
fn grid_cell(origin: Pos2, index: usize, size: f32) -> Rect {
    let col = index % 2;
    let row = index / 2;
    let x = origin.x + col as f32 * (size - 1.0);
    let y = origin.y + row as f32 * size - if row > 0 { 1.0 } else { 0.0 };
    Rect::from_min_size(pos2(x, y), vec2(size, size))
}

impl ChromeLayout {
    pub fn new(metrics: &ChromeMetrics, window_width: usize, window_height: usize) -> PaintResult<Self> {
        let m = metrics;
        let canvas_w = window_width
            .checked_sub(m.left_pane_width + 2 * m.drawing_area_margin)
            .filter(|w| *w > 0);
        let canvas_h = window_height
            .checked_sub(m.top_pane_height + m.bottom_pane_height + 2 * m.drawing_area_margin)
            .filter(|h| *h > 0);
        let (Some(canvas_w), Some(canvas_h)) = (canvas_w, canvas_h) else {
            return Err(PaintError::InvalidDimensions {
                width: window_width,
                height: window_height,
            });
        };

        let (w, h) = (window_width as f32, window_height as f32);
        let top = m.top_pane_height as f32;
        let bottom = m.bottom_pane_height as f32;
        let left = m.left_pane_width as f32;
        let margin = m.drawing_area_margin as f32;
        let button = m.button_size as f32;
        let pane_margin = m.tool_pane_margin as f32;

        let tools_origin = pos2(pane_margin, top);
        let tool_buttons = ToolKind::ALL
            .into_iter()
            .enumerate()
            .map(|(i, kind)| (kind, grid_cell(tools_origin, i, button)))
            .collect();

        let actions_origin = pos2(pane_margin, top + m.actions_offset as f32);
        debug_assert!(Action::ALL.iter().all(|a| a.slot() < ACTION_SLOTS));
        let action_buttons = Action::ALL
            .into_iter()
            .map(|action| (action, grid_cell(actions_origin, action.slot(), button)))
            .collect();

        let palette_top = h - bottom + pane_margin;
        let swatches = (0..COLORS.len())
            .map(|i| {
                let (row, col) = (i / COLORS_PER_ROW, i % COLORS_PER_ROW);
                let x = left + col as f32 * (button - 1.0);
                let y = palette_top + row as f32 * (button - 1.0);
                Rect::from_min_size(pos2(x, y), vec2(button, button))
            })
            .collect();

        Ok(Self {
            window: Rect::from_min_size(Pos2::ZERO, vec2(w, h)),
            top_pane: Rect::from_min_size(Pos2::ZERO, vec2(w, top)),
            left_pane: Rect::from_min_size(pos2(0.0, top), vec2(left, h - top - bottom)),
            bottom_pane: Rect::from_min_size(pos2(0.0, h - bottom), vec2(w, bottom)),
            drawing_area: Rect::from_min_size(
                pos2(left + margin, top + margin),
                vec2(canvas_w as f32, canvas_h as f32),
            ),
            canvas_size: [canvas_w, canvas_h],
            tool_buttons,
            action_buttons,
            swatches,
        })
    }

    /// Canvas dimensions in pixels
    pub fn canvas_size(&self) -> [usize; 2] {
        self.canvas_size
    }

    pub fn tool_buttons(&self) -> &[(ToolKind, Rect)] {
        &self.tool_buttons
    }

    pub fn action_buttons(&self) -> &[(Action, Rect)] {
        &self.action_buttons
    }

    /// Swatch rectangles, indexed like `palette::COLORS`
    pub fn swatches(&self) -> &[Rect] {
        &self.swatches
    }

    /// Converts a screen position to drawing-local pixel coordinates.
    /// The result may lie outside the canvas.
    pub fn to_canvas(&self, pos: Pos2) -> Point {
        Point::from_offset(pos - self.drawing_area.min)
    }

    /// Maps a screen position to the control under it. Buttons win over
    /// the panes they sit in.
    pub fn hit_test(&self, pos: Pos2) -> Hit {
        if let Some((kind, _)) = self.tool_buttons.iter().find(|(_, r)| r.contains(pos)) {
            return Hit::Tool(*kind);
        }
        if let Some((action, _)) = self.action_buttons.iter().find(|(_, r)| r.contains(pos)) {
            return Hit::Action(*action);
        }
        if let Some(i) = self.swatches.iter().position(|r| r.contains(pos)) {
            return Hit::Swatch(i);
        }
        if self.drawing_area.contains(pos) {
            return Hit::Canvas(self.to_canvas(pos));
        }
        if [self.top_pane, self.left_pane, self.bottom_pane]
            .iter()
            .any(|r| r.contains(pos))
        {
            return Hit::Chrome;
        }
        Hit::Nothing
    }
}
