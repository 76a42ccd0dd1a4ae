#![warn(clippy::all, rust_2018_idioms)]

pub mod action;
pub mod app;
pub mod brush;
pub mod components;
pub mod compositor;
pub mod config;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod history;
pub mod icons;
mod id_generator;
pub mod input;
pub mod layout;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;

pub use action::Action;
pub use app::PaintApp;
pub use brush::{BrushSettings, BrushSize};
pub use compositor::StrokeCompositor;
pub use config::PaintConfig;
pub use error::{PaintError, PaintResult};
pub use geometry::{Hit, PixelRect, Point};
pub use gesture::{Gesture, GesturePhase, GestureStep, PointerSample};
pub use history::{HistoryError, OverflowPolicy, Snapshot, SnapshotHistory};
pub use layout::{ChromeLayout, ChromeMetrics};
pub use renderer::Renderer;
pub use state::PainterState;
pub use surface::Surface;
pub use tools::{Tool, ToolKind};
