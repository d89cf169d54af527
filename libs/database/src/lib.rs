//! Database library providing connectors and utilities for MongoDB
//!
//! This library provides a unified interface for connecting to and managing
//! database connections.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Examples
//!
//! ## MongoDB
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("mydb");
//! let collection = db.collection::<Document>("products");
//! ```

// Always available modules
pub mod common;

// Database-specific modules (conditional based on features)
#[cfg(feature = "mongodb")]
pub mod mongodb;

// Re-exports for convenience
pub use common::{retry, retry_with_backoff, RetryConfig};
