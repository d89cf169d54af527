//! Tags Domain
//!
//! A minimal domain implementation for managing tags using MongoDB:
//! create, list, get and delete, following the same
//! handlers → service → repository → models layering as the products
//! domain.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TagError, TagResult};
pub use handlers::ApiDoc;
pub use models::{CreateTag, Tag, TagFilter};
pub use mongodb::MongoTagRepository;
pub use repository::TagRepository;
pub use service::TagService;
