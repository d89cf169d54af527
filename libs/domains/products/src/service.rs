//! Product Service - Business logic layer
//!
//! CRUD orchestration plus the thumbnail pipeline: multipart extraction,
//! validation, resize, file storage and linking the reference path to
//! the product record.

use std::sync::Arc;

use axum::extract::Multipart;
use storage::FileStore;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter, ReplaceProduct, UpdateProduct};
use crate::repository::ProductRepository;
use crate::{thumbnail, upload};

/// Product service providing business logic operations
///
/// The service layer handles validation, orchestrates repository
/// operations and owns the thumbnail pipeline against the file store.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    store: Arc<dyn FileStore>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository and file store
    pub fn new(repository: R, store: Arc<dyn FileStore>) -> Self {
        Self {
            repository: Arc::new(repository),
            store,
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List products with optional filters
    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        self.repository.list(filter).await
    }

    /// Count products matching a filter
    #[instrument(skip(self))]
    pub async fn count_products(&self, filter: ProductFilter) -> ProductResult<u64> {
        self.repository.count(filter).await
    }

    /// Partially update an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Partially update all products matching a filter, returning the
    /// number of matched documents
    #[instrument(skip(self, input))]
    pub async fn update_products(
        &self,
        filter: ProductFilter,
        input: UpdateProduct,
    ) -> ProductResult<u64> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.update_many(filter, input).await
    }

    /// Replace a product's attributes
    #[instrument(skip(self, input))]
    pub async fn replace_product(&self, id: Uuid, input: ReplaceProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.replace(id, input).await
    }

    /// Delete a product, removing its thumbnail file first (best effort)
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        let product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        if let Some(key) = product.thumbnail_key() {
            self.discard_thumbnail_file(id, key).await;
        }

        self.repository.delete(id).await?;
        Ok(())
    }

    /// Upload a thumbnail image for a product
    ///
    /// Pipeline: lookup, extract, validate type and size, best-effort
    /// delete of the previous file, resize to 100x100 JPEG, store,
    /// link the reference path on the record. A write failure on the
    /// new file leaves the record untouched. The delete-before-write
    /// ordering means a failure in between can leave the record
    /// pointing at a removed file; accepted, there is no transaction
    /// spanning the file system and the database.
    #[instrument(skip(self, multipart))]
    pub async fn upload_thumbnail(
        &self,
        id: Uuid,
        multipart: Multipart,
    ) -> ProductResult<String> {
        let product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        let files = upload::extract_files(multipart).await?;
        let file = files
            .into_iter()
            .next()
            .ok_or_else(|| ProductError::Validation("No file provided".to_string()))?;

        tracing::debug!(
            product_id = %id,
            filename = %file.filename,
            content_type = %file.content_type,
            size = file.size(),
            "Received thumbnail upload"
        );

        upload::validate_content_type(&file.content_type)?;
        upload::validate_file_size(file.size())?;

        if let Some(old_key) = product.thumbnail_key() {
            self.discard_thumbnail_file(id, old_key).await;
        }

        let resized = thumbnail::resize_to_thumbnail(&file.data)?;
        let key = thumbnail::thumbnail_key(id);

        self.store
            .store(&key, &resized)
            .await
            .map_err(|e| ProductError::Storage(e.to_string()))?;

        self.repository.set_thumbnail(id, Some(key.clone())).await?;

        tracing::info!(product_id = %id, key = %key, "Thumbnail uploaded");
        Ok(key)
    }

    /// Delete a product's thumbnail
    ///
    /// A no-op success when no thumbnail is set, so repeated deletes
    /// are idempotent.
    #[instrument(skip(self))]
    pub async fn delete_thumbnail(&self, id: Uuid) -> ProductResult<()> {
        let product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        let Some(key) = product.thumbnail_key() else {
            return Ok(());
        };

        self.discard_thumbnail_file(id, key).await;
        self.repository.set_thumbnail(id, None).await?;

        tracing::info!(product_id = %id, "Thumbnail deleted");
        Ok(())
    }

    /// Best-effort removal of a stored thumbnail file
    ///
    /// Failures are logged and swallowed so a stuck file never blocks
    /// the enclosing record operation.
    async fn discard_thumbnail_file(&self, id: Uuid, key: &str) {
        if let Err(err) = self.store.delete(key).await {
            tracing::warn!(
                product_id = %id,
                key = %key,
                error = %err,
                "Failed to delete thumbnail file, continuing"
            );
        }
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            store: Arc::clone(&self.store),
        }
    }
}
