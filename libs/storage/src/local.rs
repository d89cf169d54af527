use crate::{FileStore, StorageError, StorageResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
///
/// Files are written under a base directory. Parent directories are created
/// lazily on write, so the backend can be constructed before the directory
/// tree exists.
#[derive(Clone)]
pub struct LocalFileStore {
    base_dir: PathBuf,
}

impl LocalFileStore {
    /// Create a new LocalFileStore rooted at `base_dir`
    ///
    /// # Arguments
    /// * `base_dir` - Root directory for file storage (e.g., "public")
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Convert a storage key to a filesystem path with security validation
    ///
    /// Rejects keys containing path traversal sequences that could escape
    /// the base storage directory.
    fn key_to_path(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey("Storage key is empty".to_string()));
        }

        if key.contains("..") || key.starts_with('/') || key.contains('\\') {
            return Err(StorageError::InvalidKey(
                "Storage key contains invalid characters".to_string(),
            ));
        }

        Ok(self.base_dir.join(key))
    }

    /// Ensure parent directory exists
    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn store(&self, key: &str, data: &[u8]) -> StorageResult<()> {
        let path = self.key_to_path(key)?;
        let start = std::time::Instant::now();

        self.ensure_parent_dir(&path).await?;

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage write successful"
        );

        Ok(())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let path = self.key_to_path(key)?;

        // A single remove avoids the check-then-remove race
        fs::remove_file(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(key.to_string()),
            _ => StorageError::DeleteFailed(format!(
                "Failed to delete file {}: {}",
                path.display(),
                e
            )),
        })?;

        tracing::info!(path = %path.display(), key = %key, "Local storage delete successful");

        Ok(())
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let path = self.key_to_path(key)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_store_and_exists() {
        let dir = tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());

        store
            .store("uploads/product-thumbnails/test.jpg", b"jpeg bytes")
            .await
            .unwrap();

        assert!(store
            .exists("uploads/product-thumbnails/test.jpg")
            .await
            .unwrap());
        assert!(!store.exists("uploads/other.jpg").await.unwrap());

        let on_disk =
            std::fs::read(dir.path().join("uploads/product-thumbnails/test.jpg")).unwrap();
        assert_eq!(on_disk, b"jpeg bytes");
    }

    #[tokio::test]
    async fn test_store_overwrites_existing() {
        let dir = tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());

        store.store("file.bin", b"first").await.unwrap();
        store.store("file.bin", b"second").await.unwrap();

        let on_disk = std::fs::read(dir.path().join("file.bin")).unwrap();
        assert_eq!(on_disk, b"second");
    }

    #[tokio::test]
    async fn test_delete_removes_file() {
        let dir = tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());

        store.store("uploads/a.jpg", b"data").await.unwrap();
        store.delete("uploads/a.jpg").await.unwrap();

        assert!(!store.exists("uploads/a.jpg").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_returns_not_found() {
        let dir = tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());

        let result = store.delete("uploads/missing.jpg").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let dir = tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());

        let result = store.store("../../../etc/passwd", b"x").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = store.delete("../etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = store.exists("/etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_empty_key_rejected() {
        let dir = tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());

        let result = store.store("", b"x").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }
}
