//! Products Domain
//!
//! This module provides a complete domain implementation for managing
//! products using MongoDB, plus the thumbnail upload pipeline.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, thumbnail pipeline
//! └──────┬──────┘
//!        │
//!        ├──────────────────┐
//! ┌──────▼──────┐    ┌──────▼──────┐
//! │ Repository  │    │ File store  │  ← MongoDB / local disk
//! └──────┬──────┘    └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use domain_products::{
//!     handlers,
//!     mongodb::MongoProductRepository,
//!     service::ProductService,
//! };
//! use mongodb::Client;
//! use storage::LocalFileStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("mydb");
//!
//! let repository = MongoProductRepository::new(&db);
//! let store = Arc::new(LocalFileStore::new("public"));
//! let service = ProductService::new(repository, store);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;
pub mod thumbnail;
pub mod upload;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    CountResponse, CreateProduct, Product, ProductFilter, ReplaceProduct, UpdateProduct,
};
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
pub use upload::{UploadedFile, MAX_FILE_SIZE};
