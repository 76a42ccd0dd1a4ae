use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop the application from starting
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Failed to load tool icon {path}: {source}")]
    Icon {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to read config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid config value for {field}: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("Window {width}x{height} leaves no room for a drawing area")]
    InvalidDimensions { width: usize, height: usize },
}

/// Result type for startup operations
pub type PaintResult<T> = Result<T, PaintError>;
