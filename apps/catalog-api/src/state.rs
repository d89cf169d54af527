//! Application state management.
//!
//! This module defines the shared application state passed to all request handlers.

use std::sync::Arc;

use mongodb::{Client, Database};
use storage::FileStore;

/// Shared application state.
///
/// This struct is cloned for each handler (inexpensive Arc clones), providing access to:
/// - Application configuration
/// - MongoDB client and database
/// - File store for thumbnail persistence
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
    /// File store rooted at the public static directory
    pub store: Arc<dyn FileStore>,
}
