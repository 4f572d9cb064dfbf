use async_trait::async_trait;
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::policies::image_extension;
use crate::profile::application::ports::outgoing::{
    ImageStorage, ImageStorageError, ImageUpload, StoredImage,
};

/// URL prefix the upload directory is served under.
pub const PUBLIC_PREFIX: &str = "uploads";

/// Fresh names tried before giving up on a crowded directory.
const MAX_NAME_ATTEMPTS: usize = 8;

/// Stores images on local disk as `<root>/<user_id>/<millis>.<ext>`.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    root: PathBuf,
    last_stamp: Arc<AtomicI64>,
}

impl LocalImageStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            last_stamp: Arc::new(AtomicI64::new(0)),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Millisecond timestamp, strictly increasing across all clones.
    fn next_stamp(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .last_stamp
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);

        now.max(previous + 1)
    }

    /// Maps a public `uploads/...` path back to a file under `root`.
    fn resolve(&self, public_path: &str) -> Result<PathBuf, ImageStorageError> {
        let relative = public_path
            .strip_prefix(PUBLIC_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(|| ImageStorageError::InvalidPath(public_path.to_string()))?;

        let relative = Path::new(relative);
        let is_plain = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));

        if relative.as_os_str().is_empty() || !is_plain {
            return Err(ImageStorageError::InvalidPath(public_path.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn store(
        &self,
        owner: UserId,
        image: ImageUpload,
    ) -> Result<StoredImage, ImageStorageError> {
        let dir = self.root.join(owner.to_string());
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| ImageStorageError::Io(e.to_string()))?;

        let extension = image_extension(&image.original_name, &image.content_type);

        // create_new never replaces a file that is already there
        let mut attempts = 0;
        let (file_name, mut file) = loop {
            let file_name = format!("{}.{}", self.next_stamp(), extension);
            let opened = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(dir.join(&file_name))
                .await;

            match opened {
                Ok(file) => break (file_name, file),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    attempts += 1;
                    warn!("Upload name {} already taken, picking another", file_name);
                    if attempts >= MAX_NAME_ATTEMPTS {
                        return Err(ImageStorageError::Io(e.to_string()));
                    }
                }
                Err(e) => return Err(ImageStorageError::Io(e.to_string())),
            }
        };

        file.write_all(&image.bytes)
            .await
            .map_err(|e| ImageStorageError::Io(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| ImageStorageError::Io(e.to_string()))?;

        let path = format!("{}/{}/{}", PUBLIC_PREFIX, owner, file_name);
        debug!("Stored {} ({} bytes)", path, image.bytes.len());

        Ok(StoredImage { path })
    }

    async fn remove(&self, path: &str) -> Result<(), ImageStorageError> {
        let file = self.resolve(path)?;

        match tokio::fs::remove_file(&file).await {
            Ok(()) => Ok(()),
            // Already gone
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ImageStorageError::Io(e.to_string())),
        }
    }
}
