//! Tag Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{TagError, TagResult};
use crate::models::{CreateTag, Tag, TagFilter};
use crate::repository::TagRepository;

/// Tag service providing business logic operations
pub struct TagService<R: TagRepository> {
    repository: Arc<R>,
}

impl<R: TagRepository> TagService<R> {
    /// Create a new TagService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new tag
    #[instrument(skip(self, input), fields(tag_name = %input.name))]
    pub async fn create_tag(&self, input: CreateTag) -> TagResult<Tag> {
        input
            .validate()
            .map_err(|e| TagError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a tag by ID
    #[instrument(skip(self))]
    pub async fn get_tag(&self, id: Uuid) -> TagResult<Tag> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TagError::NotFound(id))
    }

    /// List tags with optional filters
    #[instrument(skip(self))]
    pub async fn list_tags(&self, filter: TagFilter) -> TagResult<Vec<Tag>> {
        self.repository.list(filter).await
    }

    /// Delete a tag
    #[instrument(skip(self))]
    pub async fn delete_tag(&self, id: Uuid) -> TagResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

impl<R: TagRepository> Clone for TagService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
