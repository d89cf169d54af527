use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Tag entity - represents a tag stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Tag {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Tag name
    pub name: String,
    /// Additional free-form attributes keyed by field name
    #[serde(default)]
    #[schema(value_type = Object)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new tag
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTag {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// Query filters for listing tags
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct TagFilter {
    /// Search in name
    pub search: Option<String>,
    /// Maximum number of results
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of results to skip
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> i64 {
    50
}

impl Tag {
    /// Create a new tag from CreateTag DTO
    pub fn new(input: CreateTag) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            metadata: input.metadata,
            created_at: now,
            updated_at: now,
        }
    }
}
