//! Thumbnail image processing
//!
//! Decodes an uploaded image, resizes it to a fixed square and
//! re-encodes it as JPEG. Storage keys embed the product id and a
//! millisecond timestamp so repeated uploads never collide.

use std::io::Cursor;

use image::{imageops::FilterType, DynamicImage, ImageFormat, ImageReader};
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};

/// Edge length of the generated thumbnail in pixels
pub const THUMBNAIL_SIZE_PX: u32 = 100;

/// Storage directory for thumbnails, relative to the public static root
pub const THUMBNAIL_DIR: &str = "uploads/product-thumbnails";

/// Storage key for a new thumbnail: `{dir}/{id}_thumbnail_{epochMillis}.jpg`
///
/// The key doubles as the externally addressable reference path.
pub fn thumbnail_key(product_id: Uuid) -> String {
    let timestamp = chrono::Utc::now().timestamp_millis();
    format!("{}/{}_thumbnail_{}.jpg", THUMBNAIL_DIR, product_id, timestamp)
}

/// Decode image bytes, resize to exactly 100x100 (aspect ratio is not
/// preserved) and re-encode as JPEG
pub fn resize_to_thumbnail(data: &[u8]) -> ProductResult<Vec<u8>> {
    let image = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| ProductError::Image(format!("Failed to read image: {}", e)))?
        .decode()
        .map_err(|e| ProductError::Image(format!("Failed to decode image: {}", e)))?;

    let resized = image.resize_exact(THUMBNAIL_SIZE_PX, THUMBNAIL_SIZE_PX, FilterType::Lanczos3);

    // JPEG has no alpha channel; flatten before encoding
    let rgb = DynamicImage::ImageRgb8(resized.to_rgb8());

    let mut buffer = Cursor::new(Vec::new());
    rgb.write_to(&mut buffer, ImageFormat::Jpeg)
        .map_err(|e| ProductError::Image(format!("Failed to encode thumbnail: {}", e)))?;

    Ok(buffer.into_inner())
}
