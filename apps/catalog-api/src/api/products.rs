//! Products API routes
//!
//! This module wires up the products domain to HTTP routes.

use axum::Router;
use domain_products::{MongoProductRepository, ProductService, handlers};
use mongodb::Database;

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let repository = MongoProductRepository::new(&state.db);
    let service = ProductService::new(repository, state.store.clone());

    handlers::router(service)
}

/// Initialize product collection indexes
pub async fn init_indexes(db: &Database) -> domain_products::ProductResult<()> {
    MongoProductRepository::new(db).init_indexes().await
}
