use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFilter, ReplaceProduct, UpdateProduct};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends (MongoDB, PostgreSQL, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// List products with optional filters
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Count products matching a filter
    async fn count(&self, filter: ProductFilter) -> ProductResult<u64>;

    /// Partially update an existing product
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product>;

    /// Partially update all products matching a filter, returning the
    /// number of matched documents
    async fn update_many(&self, filter: ProductFilter, input: UpdateProduct) -> ProductResult<u64>;

    /// Replace a product's attributes, keeping id, creation timestamp
    /// and thumbnail reference
    async fn replace(&self, id: Uuid, input: ReplaceProduct) -> ProductResult<Product>;

    /// Set or clear the thumbnail reference path
    async fn set_thumbnail(&self, id: Uuid, thumbnail: Option<String>) -> ProductResult<()>;

    /// Delete a product by ID
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;
}
