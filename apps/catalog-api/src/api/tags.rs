//! Tags API routes

use axum::Router;
use domain_tags::{MongoTagRepository, TagService, handlers};
use mongodb::Database;

use crate::state::AppState;

/// Create tags router
pub fn router(state: &AppState) -> Router {
    let repository = MongoTagRepository::new(&state.db);
    let service = TagService::new(repository);

    handlers::router(service)
}

/// Initialize tag collection indexes
pub async fn init_indexes(db: &Database) -> domain_tags::TagResult<()> {
    MongoTagRepository::new(db).init_indexes().await
}
