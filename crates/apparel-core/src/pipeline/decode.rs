//! Image loading with content-based format detection.

use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{DescribeError, DescribeResult};

/// Loads and decodes images from disk.
pub struct ImageDecoder;

/// Result of decoding an image.
pub struct DecodedImage {
    /// The decoded image data
    pub image: DynamicImage,
    /// Detected source format
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    /// Original file size in bytes
    pub file_size: u64,
}

impl ImageDecoder {
    /// Read and decode the image at `path`.
    ///
    /// A path that does not resolve yields [`DescribeError::ImageNotFound`];
    /// every other read or decode failure is [`DescribeError::ImageDecode`].
    pub async fn decode(path: &Path) -> DescribeResult<DecodedImage> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DescribeError::ImageNotFound(path.to_path_buf()));
            }
            Err(e) => {
                return Err(DescribeError::ImageDecode {
                    path: path.to_path_buf(),
                    message: format!("Cannot read file: {e}"),
                });
            }
        };

        let path_owned = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::decode_bytes_sync(bytes, &path_owned))
            .await
            .map_err(|e| DescribeError::ImageDecode {
                path: path.to_path_buf(),
                message: format!("Task join error: {e}"),
            })?
    }

    /// Synchronous decode from bytes (runs in spawn_blocking).
    fn decode_bytes_sync(bytes: Vec<u8>, path: &Path) -> DescribeResult<DecodedImage> {
        use std::io::Cursor;

        let file_size = bytes.len() as u64;
        let mut reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| DescribeError::ImageDecode {
                path: path.to_path_buf(),
                message: format!("Cannot detect image format: {e}"),
            })?;

        // Content sniffing wins; the extension is only a fallback.
        let format = match reader.format() {
            Some(f) => f,
            None => {
                let f = ImageFormat::from_path(path).map_err(|_| DescribeError::ImageDecode {
                    path: path.to_path_buf(),
                    message: "Unrecognized image format".to_string(),
                })?;
                reader.set_format(f);
                f
            }
        };

        let image = reader.decode().map_err(|e| DescribeError::ImageDecode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let (width, height) = image.dimensions();
        tracing::debug!(
            "Decoded {} ({width}x{height}, {:?}, {file_size} bytes)",
            path.display(),
            format
        );

        Ok(DecodedImage {
            image,
            format,
            width,
            height,
            file_size,
        })
    }
}
