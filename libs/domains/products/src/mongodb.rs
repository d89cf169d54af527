//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter, ReplaceProduct, UpdateProduct};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Initialize indexes for optimal query performance
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            // Text search on name and description
            IndexModel::builder()
                .keys(doc! { "name": "text", "description": "text" })
                .options(
                    IndexOptions::builder()
                        .name("idx_text_search".to_string())
                        .build(),
                )
                .build(),
            // Price range queries
            IndexModel::builder()
                .keys(doc! { "price": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_price".to_string())
                        .build(),
                )
                .build(),
            // Tags index
            IndexModel::builder()
                .keys(doc! { "tags": 1 })
                .options(IndexOptions::builder().name("idx_tags".to_string()).build())
                .build(),
            // Listing sort order
            IndexModel::builder()
                .keys(doc! { "created_at": -1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_created_at".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    /// Build a MongoDB filter document from ProductFilter
    fn build_filter(filter: &ProductFilter) -> Document {
        let mut doc = doc! {};

        if let Some(ref search) = filter.search {
            doc.insert(
                "$or",
                vec![
                    doc! { "name": { "$regex": search, "$options": "i" } },
                    doc! { "description": { "$regex": search, "$options": "i" } },
                ],
            );
        }

        // Price range
        if filter.min_price.is_some() || filter.max_price.is_some() {
            let mut price_filter = doc! {};
            if let Some(min) = filter.min_price {
                price_filter.insert("$gte", min);
            }
            if let Some(max) = filter.max_price {
                price_filter.insert("$lte", max);
            }
            doc.insert("price", price_filter);
        }

        if let Some(ref tag) = filter.tag {
            doc.insert("tags", doc! { "$in": [tag] });
        }

        doc
    }

    /// Build a `$set` update document from UpdateProduct
    fn build_update(input: &UpdateProduct) -> Document {
        let mut set = doc! {};

        if let Some(ref name) = input.name {
            set.insert("name", name);
        }
        if let Some(ref description) = input.description {
            set.insert("description", description);
        }
        if let Some(price) = input.price {
            set.insert("price", price);
        }
        if let Some(ref tags) = input.tags {
            set.insert("tags", tags.clone());
        }
        if let Some(ref metadata) = input.metadata {
            set.insert("metadata", to_bson(metadata).unwrap_or(Bson::Null));
        }
        set.insert("updated_at", chrono::Utc::now().to_rfc3339());

        doc! { "$set": set }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);

        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let product = self.collection.find_one(filter).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let mongo_filter = Self::build_filter(&filter);

        let options = mongodb::options::FindOptions::builder()
            .limit(filter.limit)
            .skip(filter.offset)
            .sort(doc! { "created_at": -1 })
            .build();

        let cursor = self
            .collection
            .find(mongo_filter)
            .with_options(options)
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: ProductFilter) -> ProductResult<u64> {
        let mongo_filter = Self::build_filter(&filter);
        let count = self.collection.count_documents(mongo_filter).await?;
        Ok(count)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or(ProductError::NotFound(id))?;

        let mut updated = existing;
        updated.apply_update(input);

        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(product_id = %id, "Product updated successfully");
        Ok(updated)
    }

    #[instrument(skip(self, input))]
    async fn update_many(&self, filter: ProductFilter, input: UpdateProduct) -> ProductResult<u64> {
        let mongo_filter = Self::build_filter(&filter);
        let update = Self::build_update(&input);

        let result = self.collection.update_many(mongo_filter, update).await?;

        tracing::info!(matched = result.matched_count, "Products updated");
        Ok(result.matched_count)
    }

    #[instrument(skip(self, input))]
    async fn replace(&self, id: Uuid, input: ReplaceProduct) -> ProductResult<Product> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or(ProductError::NotFound(id))?;

        let mut replaced = existing;
        replaced.apply_replace(input);

        self.collection.replace_one(filter, &replaced).await?;

        tracing::info!(product_id = %id, "Product replaced successfully");
        Ok(replaced)
    }

    #[instrument(skip(self))]
    async fn set_thumbnail(&self, id: Uuid, thumbnail: Option<String>) -> ProductResult<()> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };

        let thumbnail_bson = thumbnail.map(Bson::String).unwrap_or(Bson::Null);
        let update = doc! {
            "$set": {
                "thumbnail": thumbnail_bson,
                "updated_at": chrono::Utc::now().to_rfc3339()
            }
        };

        let result = self.collection.update_one(filter, update).await?;
        if result.matched_count == 0 {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!(product_id = %id, "Thumbnail reference updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;

        if result.deleted_count == 0 {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!(product_id = %id, "Product deleted successfully");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_empty() {
        let filter = ProductFilter::default();
        let doc = MongoProductRepository::build_filter(&filter);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_build_filter_with_search() {
        let filter = ProductFilter {
            search: Some("widget".to_string()),
            ..Default::default()
        };
        let doc = MongoProductRepository::build_filter(&filter);
        assert!(doc.contains_key("$or"));
    }

    #[test]
    fn test_build_filter_with_price_range() {
        let filter = ProductFilter {
            min_price: Some(1.0),
            max_price: Some(50.0),
            ..Default::default()
        };
        let doc = MongoProductRepository::build_filter(&filter);
        assert!(doc.contains_key("price"));
    }

    #[test]
    fn test_build_filter_with_tag() {
        let filter = ProductFilter {
            tag: Some("sale".to_string()),
            ..Default::default()
        };
        let doc = MongoProductRepository::build_filter(&filter);
        assert!(doc.contains_key("tags"));
    }

    #[test]
    fn test_build_update_sets_only_present_fields() {
        let input = UpdateProduct {
            name: Some("Gadget".to_string()),
            ..Default::default()
        };
        let doc = MongoProductRepository::build_update(&input);
        let set = doc.get_document("$set").unwrap();
        assert!(set.contains_key("name"));
        assert!(set.contains_key("updated_at"));
        assert!(!set.contains_key("price"));
        assert!(!set.contains_key("thumbnail"));
    }
}
