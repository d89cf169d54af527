//! File storage abstraction.
//!
//! This library defines the [`FileStore`] trait that storage backends
//! implement, plus a local filesystem backend. The trait allows domain
//! services to persist uploaded files without coupling to a specific
//! backend.
//!
//! **Key format:** storage keys are relative, slash-separated paths such as
//! `uploads/product-thumbnails/{id}_thumbnail_{ts}.jpg`. Keys must not
//! contain `..` segments or start with `/`.

pub mod local;

pub use local::LocalFileStore;

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All storage backends must implement this trait. Domain services hold a
/// `dyn FileStore` so that backends can be swapped without touching the
/// business logic.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Write `data` under `key`, creating parent directories as needed.
    ///
    /// Overwrites any existing file at the same key.
    async fn store(&self, key: &str, data: &[u8]) -> StorageResult<()>;

    /// Delete the file at `key`.
    ///
    /// Returns [`StorageError::NotFound`] if no file exists at the key.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Check if a file exists at `key`.
    async fn exists(&self, key: &str) -> StorageResult<bool>;
}
