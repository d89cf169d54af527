use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("Tag not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type TagResult<T> = Result<T, TagError>;

/// Convert TagError to AppError for standardized error responses
impl From<TagError> for AppError {
    fn from(err: TagError) -> Self {
        match err {
            TagError::NotFound(id) => AppError::NotFound(format!("Tag {} not found", id)),
            TagError::Validation(msg) => AppError::BadRequest(msg),
            TagError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for TagError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for TagError {
    fn from(err: mongodb::error::Error) -> Self {
        TagError::Database(err.to_string())
    }
}
