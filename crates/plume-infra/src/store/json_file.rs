//! Durable post storage as a single JSON document on disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use plume_core::StoreError;
use plume_core::config::POSTS_STORAGE_KEY;
use plume_core::domain::Post;
use plume_core::ports::PostStore;

/// File-backed post store.
///
/// The whole collection lives in one JSON document at
/// `<data_dir>/scheduled_posts.json`; every save rewrites it. All
/// failures (missing directory, permissions, corrupt content) are
/// logged and converted to fallback values - this adapter never
/// returns an error across the port.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join(format!("{POSTS_STORAGE_KEY}.json")),
        }
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn try_load(&self) -> Result<Vec<Post>, StoreError> {
        let raw = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn try_save(&self, posts: &[Post]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }

        let raw = serde_json::to_string_pretty(posts)?;
        fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl PostStore for JsonFileStore {
    async fn load(&self) -> Vec<Post> {
        match self.try_load().await {
            Ok(posts) => posts,
            Err(StoreError::Io(e)) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to load posts, starting with an empty collection"
                );
                Vec::new()
            }
        }
    }

    async fn save(&self, posts: &[Post]) -> bool {
        match self.try_save(posts).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to save posts"
                );
                false
            }
        }
    }

    async fn clear(&self) -> bool {
        match fs::remove_file(&self.path).await {
            Ok(()) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to clear stored posts"
                );
                false
            }
        }
    }
}
