//! Background asset loading.
//!
//! Loaders return raw encoded bytes; decoding happens with the rest of the
//! CPU-bound render work on the blocking pool.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read asset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Source of template background images, keyed by asset name (e.g. `bg.jpg`).
#[async_trait]
pub trait AssetLoader: Send + Sync {
    async fn load(&self, name: &str) -> Result<Bytes, AssetError>;
}

/// Reads assets from a directory on disk on every request.
#[derive(Debug, Clone)]
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AssetLoader for FsAssetLoader {
    async fn load(&self, name: &str) -> Result<Bytes, AssetError> {
        let path = self.root.join(name);
        match tokio::fs::read(&path).await {
            Ok(data) => {
                debug!(path = %path.display(), bytes = data.len(), "Loaded asset");
                Ok(Bytes::from(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(AssetError::NotFound { path }),
            Err(source) => Err(AssetError::Io { path, source }),
        }
    }
}
