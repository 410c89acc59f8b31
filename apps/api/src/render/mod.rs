// Notice rendering: background templates, text drawing and PNG encoding.
// Composition and encoding are CPU-bound; handlers run them inside tokio::task::spawn_blocking.

pub mod assets;
pub mod canvas;
pub mod compose;
pub mod template;
pub mod typeface;

use std::path::PathBuf;

use thiserror::Error;

pub use assets::{AssetError, AssetLoader, FsAssetLoader};
pub use compose::{compose_notice, NoticeFields};
pub use template::{TemplateSpec, TemplateVariant};
pub use typeface::{FontTypeface, Typeface};

/// Failure while producing a notice image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to load background: {0}")]
    Asset(#[from] AssetError),

    #[error("failed to decode background '{name}': {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),

    #[error("font '{}' could not be loaded: {reason}", .path.display())]
    Font { path: PathBuf, reason: String },

    #[error("render task failed: {0}")]
    Task(String),
}

impl RenderError {
    /// True when the background file itself does not exist.
    pub fn is_missing_asset(&self) -> bool {
        matches!(self, RenderError::Asset(AssetError::NotFound { .. }))
    }
}
