//! File-backed image storage

use crate::error::Result;
use crate::types::CacheKey;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

/// Flat directory of `<key>.jpg` files
#[derive(Debug, Clone)]
pub struct ImageStore {
    /// Directory where cached images are stored
    cache_dir: PathBuf,
}

impl ImageStore {
    /// Create a new store rooted at `cache_dir`
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// Ensure the cache directory exists, creating parents as needed
    pub async fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.cache_dir).await?;
        info!(cache_dir = ?self.cache_dir, "Cache directory is ready");
        Ok(())
    }

    /// Path of the cache entry for `key`
    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.cache_dir.join(key.file_name())
    }

    /// Read the whole cached image for `key`
    pub async fn read(&self, key: &CacheKey) -> Result<Vec<u8>> {
        let data = fs::read(self.path_for(key)).await?;
        debug!(key = %key, size = data.len(), "Read cached image");
        Ok(data)
    }

    /// Create or overwrite the cached image for `key`
    pub async fn write(&self, key: &CacheKey, data: &[u8]) -> Result<()> {
        let path = self.path_for(key);
        fs::write(&path, data).await?;
        debug!(key = %key, path = ?path, size = data.len(), "Wrote cached image");
        Ok(())
    }

    /// Delete the cached image for `key`. Fails if there is none.
    pub async fn remove(&self, key: &CacheKey) -> Result<()> {
        fs::remove_file(self.path_for(key)).await?;
        debug!(key = %key, "Removed cached image");
        Ok(())
    }
}
