use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::brush::{BrushSettings, DEFAULT_MAX_BRUSH_SIZE, MAX_BRUSH_SIZE_LIMIT, MIN_BRUSH_SIZE};
use crate::error::{PaintError, PaintResult};
use crate::history::{OverflowPolicy, DEFAULT_CAPACITY};
use crate::layout::ChromeMetrics;
use crate::palette::DRAWING_AREA_COLOR;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "PAINTXD_CONFIG";

/// Startup configuration. Every field has a default, so a config file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    pub window_width: usize,
    pub window_height: usize,
    pub chrome: ChromeMetrics,
    /// Snapshots kept, base entry included. Every snapshot is a full RGBA
    /// copy of the canvas (about 3.2 MB at the default window size), so the
    /// default of 256 can hold roughly 800 MB once the history is full.
    pub history_capacity: usize,
    pub overflow_policy: OverflowPolicy,
    pub max_brush_size: u32,
    /// Tool, color and size used when no saved settings exist
    pub brush: BrushSettings,
    /// Canvas background, also the eraser color
    pub background: Color32,
    /// Directory holding `tool1.png` … `tool5.png`
    pub resources_dir: PathBuf,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 800,
            chrome: ChromeMetrics::default(),
            history_capacity: DEFAULT_CAPACITY,
            overflow_policy: OverflowPolicy::default(),
            max_brush_size: DEFAULT_MAX_BRUSH_SIZE,
            brush: BrushSettings::default(),
            background: DRAWING_AREA_COLOR,
            resources_dir: PathBuf::from("resources"),
        }
    }
}

impl PaintConfig {
    /// Parses and validates a config
    pub fn from_json(json: &str) -> PaintResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the painter can't honor: brush sizes beyond
    /// `MAX_BRUSH_SIZE_LIMIT` and backgrounds that aren't fully opaque.
    pub fn validate(&self) -> PaintResult<()> {
        if !(MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE_LIMIT).contains(&self.max_brush_size) {
            return Err(PaintError::InvalidSetting {
                field: "max_brush_size",
                reason: format!(
                    "{} is outside {MIN_BRUSH_SIZE}..={MAX_BRUSH_SIZE_LIMIT}",
                    self.max_brush_size
                ),
            });
        }
        if self.brush.size.get() > self.max_brush_size {
            return Err(PaintError::InvalidSetting {
                field: "brush.size",
                reason: format!(
                    "{} exceeds max_brush_size {}",
                    self.brush.size.get(),
                    self.max_brush_size
                ),
            });
        }
        if self.background.a() != u8::MAX {
            return Err(PaintError::InvalidSetting {
                field: "background",
                reason: format!("must be opaque, alpha is {}", self.background.a()),
            });
        }
        Ok(())
    }

    pub fn load_from_path(path: &Path) -> PaintResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| PaintError::ConfigIo {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reads the file named by `PAINTXD_CONFIG`, or falls back to defaults
    pub fn load() -> PaintResult<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                log::info!("Loading config from {}", path.display());
                Self::load_from_path(&path)
            }
            None => {
                log::debug!("{CONFIG_ENV} not set, using default config");
                Ok(Self::default())
            }
        }
    }

    pub fn window_size(&self) -> [f32; 2] {
        [self.window_width as f32, self.window_height as f32]
    }
}
