use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::tools::ToolKind;

pub const MIN_BRUSH_SIZE: u32 = 1;
pub const DEFAULT_MAX_BRUSH_SIZE: u32 = 512;
pub const DEFAULT_BRUSH_SIZE: u32 = 15;
/// Largest size a config may allow; keeps raster math within `i32`
pub const MAX_BRUSH_SIZE_LIMIT: u32 = i16::MAX as u32;

/// Brush size in pixels: the disk radius for circles, the side for squares.
/// Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrushSize(u32);

impl BrushSize {
    pub fn new(size: u32) -> Self {
        Self(size.max(MIN_BRUSH_SIZE))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Size as a signed pixel extent for raster math, capped at
    /// `MAX_BRUSH_SIZE_LIMIT`
    pub fn pixels(self) -> i32 {
        self.0.min(MAX_BRUSH_SIZE_LIMIT) as i32
    }

    pub fn increased(self, max: u32) -> Self {
        Self(self.0.saturating_add(1).min(max.max(MIN_BRUSH_SIZE)))
    }

    pub fn decreased(self) -> Self {
        Self(self.0.saturating_sub(1).max(MIN_BRUSH_SIZE))
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self(DEFAULT_BRUSH_SIZE)
    }
}

/// The user-facing brush choices, restored between launches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    pub tool: ToolKind,
    pub color: Color32,
    pub size: BrushSize,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            tool: ToolKind::Circle,
            color: Color32::BLACK,
            size: BrushSize::default(),
        }
    }
}
