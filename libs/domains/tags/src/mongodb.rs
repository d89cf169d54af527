//! MongoDB implementation of TagRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{TagError, TagResult};
use crate::models::{CreateTag, Tag, TagFilter};
use crate::repository::TagRepository;

/// MongoDB implementation of the TagRepository
pub struct MongoTagRepository {
    collection: Collection<Tag>,
}

impl MongoTagRepository {
    /// Create a new MongoTagRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Tag>("tags");
        Self { collection }
    }

    /// Create a new MongoTagRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Tag>(collection_name);
        Self { collection }
    }

    /// Initialize indexes
    pub async fn init_indexes(&self) -> TagResult<()> {
        let indexes = vec![IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().name("idx_name".to_string()).build())
            .build()];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Tag indexes created successfully");
        Ok(())
    }

    fn build_filter(filter: &TagFilter) -> Document {
        let mut doc = doc! {};

        if let Some(ref search) = filter.search {
            doc.insert("name", doc! { "$regex": search, "$options": "i" });
        }

        doc
    }
}

#[async_trait]
impl TagRepository for MongoTagRepository {
    #[instrument(skip(self, input), fields(tag_name = %input.name))]
    async fn create(&self, input: CreateTag) -> TagResult<Tag> {
        let tag = Tag::new(input);

        self.collection.insert_one(&tag).await?;

        tracing::info!(tag_id = %tag.id, "Tag created successfully");
        Ok(tag)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> TagResult<Option<Tag>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let tag = self.collection.find_one(filter).await?;
        Ok(tag)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: TagFilter) -> TagResult<Vec<Tag>> {
        use futures_util::TryStreamExt;

        let mongo_filter = Self::build_filter(&filter);

        let options = mongodb::options::FindOptions::builder()
            .limit(filter.limit)
            .skip(filter.offset)
            .sort(doc! { "name": 1 })
            .build();

        let cursor = self
            .collection
            .find(mongo_filter)
            .with_options(options)
            .await?;
        let tags: Vec<Tag> = cursor.try_collect().await?;

        Ok(tags)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> TagResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;

        if result.deleted_count == 0 {
            return Err(TagError::NotFound(id));
        }

        tracing::info!(tag_id = %id, "Tag deleted successfully");
        Ok(true)
    }
}
