use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

/// An accepted file from the request, held in memory until validation passes.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub original_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// Forward-slash path as served under `/uploads`, e.g. `uploads/7/1700000000000.png`
    pub path: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageStorageError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Path is outside the upload directory: {0}")]
    InvalidPath(String),
}

#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Writes the image under the owner's directory as `<timestamp>.<ext>`.
    async fn store(&self, owner: UserId, image: ImageUpload)
        -> Result<StoredImage, ImageStorageError>;

    async fn remove(&self, path: &str) -> Result<(), ImageStorageError>;
}
