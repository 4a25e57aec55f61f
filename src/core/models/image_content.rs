use std::path::{Path, PathBuf};

use base64::Engine;

use crate::core::errors::{Result, VisionError};

#[derive(Clone)]
pub struct ImageContent {
    pub source_path: PathBuf,
    bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageContent")
            .field("source_path", &self.source_path)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ImageContent {
    pub async fn read_from_path(path: &Path) -> Result<Self> {
        log::debug!("[IMAGE_CONTENT] Reading image from {:?}", path);

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| VisionError::ImageRead {
                path: path.to_path_buf(),
                source,
            })?;

        log::debug!("[IMAGE_CONTENT] Read {} bytes", bytes.len());
        Ok(Self::from_bytes(path, bytes))
    }

    pub fn from_bytes(source_path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self {
            source_path: source_path.into(),
            bytes,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn encode_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }
}
