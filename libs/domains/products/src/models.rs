use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Product entity - represents a product stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product description
    #[serde(default)]
    pub description: String,
    /// Price
    pub price: Option<f64>,
    /// Tags for search and organization
    #[serde(default)]
    pub tags: Vec<String>,
    /// Additional free-form attributes keyed by field name
    #[serde(default)]
    #[schema(value_type = Object)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    /// Reference path of the stored thumbnail image, relative to the
    /// public static root (e.g. `uploads/product-thumbnails/{id}_thumbnail_{ts}.jpg`)
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// DTO for partially updating an existing product
///
/// The `thumbnail` field is deliberately absent: the reference path is
/// managed by the thumbnail endpoints only.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub tags: Option<Vec<String>>,
    #[schema(value_type = Object)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// DTO for fully replacing a product's attributes
///
/// Same shape as [`CreateProduct`]; the id, creation timestamp and
/// thumbnail reference of the existing record are preserved.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ReplaceProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// Query filters for listing, counting and bulk-updating products
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Search in name and description
    pub search: Option<String>,
    /// Minimum price
    pub min_price: Option<f64>,
    /// Maximum price
    pub max_price: Option<f64>,
    /// Filter by tag
    pub tag: Option<String>,
    /// Maximum number of results
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of results to skip
    #[serde(default)]
    pub offset: u64,
}

/// Count response for count and bulk-update endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountResponse {
    /// Number of matching documents
    pub count: u64,
}

fn default_limit() -> i64 {
    50
}

impl Product {
    /// Create a new product from CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            price: input.price,
            tags: input.tags,
            metadata: input.metadata,
            thumbnail: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from UpdateProduct DTO
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = Some(price);
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(metadata) = update.metadata {
            self.metadata = metadata;
        }
        self.updated_at = Utc::now();
    }

    /// Replace all attributes from ReplaceProduct DTO, keeping id,
    /// creation timestamp and thumbnail reference
    pub fn apply_replace(&mut self, input: ReplaceProduct) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.tags = input.tags;
        self.metadata = input.metadata;
        self.updated_at = Utc::now();
    }

    /// The thumbnail reference path, if one is set and non-empty
    pub fn thumbnail_key(&self) -> Option<&str> {
        self.thumbnail.as_deref().filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(name: &str) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            description: "A test product".to_string(),
            price: Some(9.99),
            tags: vec!["test".to_string()],
            metadata: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_new_product_has_no_thumbnail() {
        let product = Product::new(create_input("Widget"));
        assert!(product.thumbnail.is_none());
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_apply_update_partial() {
        let mut product = Product::new(create_input("Widget"));
        product.apply_update(UpdateProduct {
            name: Some("Gadget".to_string()),
            ..Default::default()
        });
        assert_eq!(product.name, "Gadget");
        assert_eq!(product.description, "A test product");
        assert_eq!(product.price, Some(9.99));
    }

    #[test]
    fn test_apply_replace_keeps_thumbnail() {
        let mut product = Product::new(create_input("Widget"));
        product.thumbnail = Some("uploads/product-thumbnails/x.jpg".to_string());
        product.apply_replace(ReplaceProduct {
            name: "Gadget".to_string(),
            description: String::new(),
            price: None,
            tags: vec![],
            metadata: serde_json::Map::new(),
        });
        assert_eq!(product.name, "Gadget");
        assert!(product.price.is_none());
        assert_eq!(
            product.thumbnail.as_deref(),
            Some("uploads/product-thumbnails/x.jpg")
        );
    }

    #[test]
    fn test_thumbnail_key_filters_empty() {
        let mut product = Product::new(create_input("Widget"));
        assert!(product.thumbnail_key().is_none());
        product.thumbnail = Some(String::new());
        assert!(product.thumbnail_key().is_none());
        product.thumbnail = Some("uploads/product-thumbnails/x.jpg".to_string());
        assert_eq!(
            product.thumbnail_key(),
            Some("uploads/product-thumbnails/x.jpg")
        );
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        use validator::Validate;
        let input = create_input("");
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        use validator::Validate;
        let mut input = create_input("Widget");
        input.price = Some(-1.0);
        assert!(input.validate().is_err());
    }
}
