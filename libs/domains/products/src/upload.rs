//! Multipart extraction and upload validation
//!
//! Parses `multipart/form-data` request bodies into [`UploadedFile`] parts
//! and validates them against the thumbnail upload constraints.

use axum::extract::Multipart;

use crate::error::{ProductError, ProductResult};

/// Maximum accepted upload size: 1 MiB
pub const MAX_FILE_SIZE: usize = 1_048_576;

/// Media types accepted for thumbnail uploads
pub const ALLOWED_CONTENT_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// A single file part extracted from a multipart request
///
/// Transient: lives for one request only. The filename is used for
/// logging, never for storage paths.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    /// Declared byte length of the part
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Extract all file parts from a multipart request body
///
/// Fields without a filename (plain form values) are skipped. Zero file
/// parts yields an empty vec, not an error; the caller decides whether
/// "no file" is a validation failure. The body is fully drained before
/// returning. Malformed framing surfaces as [`ProductError::Upload`].
pub async fn extract_files(mut multipart: Multipart) -> ProductResult<Vec<UploadedFile>> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ProductError::Upload(format!("Failed to read multipart body: {}", e)))?
    {
        let filename = match field.file_name() {
            Some(name) => name.to_string(),
            None => continue,
        };
        let content_type = field
            .content_type()
            .map(|ct| ct.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| ProductError::Upload(format!("Failed to read file data: {}", e)))?;

        files.push(UploadedFile {
            filename,
            content_type,
            data: data.to_vec(),
        });
    }

    Ok(files)
}

/// Normalize a MIME type by stripping parameters
/// (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg")
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Validate the declared media type against the thumbnail allowlist
pub fn validate_content_type(content_type: &str) -> ProductResult<()> {
    let normalized = normalize_mime_type(content_type).to_lowercase();
    if !ALLOWED_CONTENT_TYPES.contains(&normalized.as_str()) {
        return Err(ProductError::Validation(format!(
            "Unsupported content type '{}'. Allowed types: {}",
            content_type,
            ALLOWED_CONTENT_TYPES.join(", ")
        )));
    }
    Ok(())
}

/// Validate the declared byte length against [`MAX_FILE_SIZE`]
pub fn validate_file_size(size: usize) -> ProductResult<()> {
    if size > MAX_FILE_SIZE {
        return Err(ProductError::Validation(format!(
            "File size {} exceeds maximum allowed size of {} bytes",
            size, MAX_FILE_SIZE
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::Request;

    fn multipart_request(parts: &[(&str, Option<&str>, Option<&str>, &[u8])]) -> Request<Body> {
        let boundary = "test-boundary";
        let mut body = Vec::new();
        for (name, filename, content_type, data) in parts {
            body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
            match filename {
                Some(f) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        name, f
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n", name).as_bytes(),
                ),
            }
            if let Some(ct) = content_type {
                body.extend_from_slice(format!("Content-Type: {}\r\n", ct).as_bytes());
            }
            body.extend_from_slice(b"\r\n");
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

        Request::builder()
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn extract(request: Request<Body>) -> ProductResult<Vec<UploadedFile>> {
        let multipart = Multipart::from_request(request, &()).await.unwrap();
        extract_files(multipart).await
    }

    #[tokio::test]
    async fn test_extract_single_file() {
        let request = multipart_request(&[(
            "file",
            Some("photo.png"),
            Some("image/png"),
            b"png-bytes",
        )]);
        let files = extract(request).await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "photo.png");
        assert_eq!(files[0].content_type, "image/png");
        assert_eq!(files[0].data, b"png-bytes");
    }

    #[tokio::test]
    async fn test_extract_skips_plain_fields() {
        let request = multipart_request(&[
            ("note", None, None, b"not a file"),
            ("file", Some("photo.jpg"), Some("image/jpeg"), b"jpeg-bytes"),
        ]);
        let files = extract(request).await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "photo.jpg");
    }

    #[tokio::test]
    async fn test_extract_mismatched_boundary_is_an_upload_error() {
        // body framed with a boundary that does not match the declared one
        let body = b"--other-boundary\r\n\
            Content-Disposition: form-data; name=\"file\"; filename=\"a.png\"\r\n\
            Content-Type: image/png\r\n\r\n\
            png-bytes\r\n\
            --other-boundary--\r\n"
            .to_vec();
        let request = Request::builder()
            .header("content-type", "multipart/form-data; boundary=test-boundary")
            .body(Body::from(body))
            .unwrap();

        let result = extract(request).await;
        assert!(matches!(result, Err(ProductError::Upload(_))));
    }

    #[tokio::test]
    async fn test_extract_truncated_body_is_an_upload_error() {
        // opening boundary and headers, then the stream just stops
        let body = b"--test-boundary\r\n\
            Content-Disposition: form-data; name=\"file\"; filename=\"a.png\"\r\n\r\n\
            partial da"
            .to_vec();
        let request = Request::builder()
            .header("content-type", "multipart/form-data; boundary=test-boundary")
            .body(Body::from(body))
            .unwrap();

        let result = extract(request).await;
        assert!(matches!(result, Err(ProductError::Upload(_))));
    }

    #[tokio::test]
    async fn test_extract_empty_body_yields_no_files() {
        let request = multipart_request(&[]);
        let files = extract(request).await.unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_validate_content_type_allows_jpeg_and_png() {
        assert!(validate_content_type("image/jpeg").is_ok());
        assert!(validate_content_type("image/png").is_ok());
    }

    #[test]
    fn test_validate_content_type_normalizes_parameters_and_case() {
        assert!(validate_content_type("image/JPEG; charset=utf-8").is_ok());
        assert!(validate_content_type("IMAGE/PNG").is_ok());
    }

    #[test]
    fn test_validate_content_type_rejects_other_types() {
        assert!(validate_content_type("image/gif").is_err());
        assert!(validate_content_type("application/pdf").is_err());
        assert!(validate_content_type("application/octet-stream").is_err());
    }

    #[test]
    fn test_validate_file_size_boundary() {
        assert!(validate_file_size(MAX_FILE_SIZE).is_ok());
        assert!(validate_file_size(MAX_FILE_SIZE + 1).is_err());
        assert!(validate_file_size(0).is_ok());
    }
}
