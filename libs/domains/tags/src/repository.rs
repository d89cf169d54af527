use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TagResult;
use crate::models::{CreateTag, Tag, TagFilter};

/// Repository trait for Tag persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Create a new tag
    async fn create(&self, input: CreateTag) -> TagResult<Tag>;

    /// Get a tag by ID
    async fn get_by_id(&self, id: Uuid) -> TagResult<Option<Tag>>;

    /// List tags with optional filters
    async fn list(&self, filter: TagFilter) -> TagResult<Vec<Tag>>;

    /// Delete a tag by ID
    async fn delete(&self, id: Uuid) -> TagResult<bool>;
}
