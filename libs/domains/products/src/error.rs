use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Invalid image: {0}")]
    Image(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
///
/// Malformed multipart framing maps to 400: it is client input, even
/// though the decode failure surfaces mid-stream.
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Upload(msg) => AppError::BadRequest(msg),
            ProductError::Image(msg) => AppError::BadRequest(msg),
            ProductError::Storage(msg) => AppError::InternalServerError(msg),
            ProductError::Database(msg) => AppError::InternalServerError(msg),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<storage::StorageError> for ProductError {
    fn from(err: storage::StorageError) -> Self {
        ProductError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_upload_error_maps_to_bad_request() {
        let err = AppError::from(ProductError::Upload("invalid multipart boundary".to_string()));
        assert!(matches!(err, AppError::BadRequest(_)));

        let response = ProductError::Upload("invalid multipart boundary".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ProductError::NotFound(uuid::Uuid::now_v7()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_error_maps_to_500() {
        let response = ProductError::Storage("disk full".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
