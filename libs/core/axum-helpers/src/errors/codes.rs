//! Type-safe error codes for API responses.
//!
//! This module provides a single source of truth for error codes used across
//! the application. Each error code includes:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
///
/// This enum provides a type-safe way to represent error codes across the application.
/// It combines string identifiers (for clients), integer codes (for monitoring), and
/// default messages (for consistency).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Invalid UUID format in path or query parameter
    InvalidUuid,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// Request conflicts with current resource state (e.g., duplicate resource)
    Conflict,

    /// Uploaded file was rejected (wrong type, too large, or malformed body)
    InvalidUpload,

    // Server errors (1000s)
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // I/O errors (4000s)
    /// File system I/O error
    IoError,

    // JSON parsing errors (5000s)
    /// JSON serialization/deserialization error
    SerdeJsonError,
}

impl ErrorCode {
    /// Get the string representation for client consumption.
    ///
    /// This returns a SCREAMING_SNAKE_CASE identifier that clients can use
    /// to programmatically handle specific error types.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidUuid => "INVALID_UUID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::InvalidUpload => "INVALID_UPLOAD",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::IoError => "IO_ERROR",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Get the integer code for logging and monitoring.
    ///
    /// These codes are used in structured logs and metrics to identify error types.
    /// They are organized into ranges:
    /// - 1000-1999: Client errors
    /// - 4000-4999: I/O errors
    /// - 5000-5999: Serialization errors
    pub fn code(&self) -> i32 {
        match self {
            // Client errors (1000-1999)
            Self::ValidationError => 1001,
            Self::InvalidUuid => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::Conflict => 1008,
            Self::ServiceUnavailable => 1011,
            Self::InvalidUpload => 1012,

            // I/O errors (4000s)
            Self::IoError => 4001,

            // JSON parsing errors (5000s)
            Self::SerdeJsonError => 5001,
        }
    }

    /// Get the default user-facing error message.
    ///
    /// This provides a consistent, human-readable message for each error type.
    /// Individual handlers can override these messages with more specific details.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidUuid => "Invalid UUID format",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::Conflict => "Resource already exists",
            Self::InvalidUpload => "Uploaded file was rejected",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::IoError => "I/O error occurred",
            Self::SerdeJsonError => "JSON serialization error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
