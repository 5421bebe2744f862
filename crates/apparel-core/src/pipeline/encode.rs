//! Re-encoding images into a format the Gemini API accepts.
//!
//! Only JPEG and PNG are sent. PNG sources stay PNG; everything else,
//! including JPEG, is written out as JPEG.

use base64::Engine;
use image::{ColorType, DynamicImage, ImageFormat};
use std::io::Cursor;

/// Encoded image bytes plus the MIME type they were written as.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

/// Encode `image` as JPEG or PNG depending on its source format.
pub fn encode(
    image: &DynamicImage,
    source_format: ImageFormat,
) -> Result<EncodedImage, image::ImageError> {
    let (format, mime_type) = match source_format {
        ImageFormat::Png => (ImageFormat::Png, "image/png"),
        ImageFormat::Jpeg => (ImageFormat::Jpeg, "image/jpeg"),
        other => {
            tracing::warn!("Source format {other:?} is not accepted by the API, re-encoding as JPEG");
            (ImageFormat::Jpeg, "image/jpeg")
        }
    };

    let mut bytes = Vec::new();
    let mut cursor = Cursor::new(&mut bytes);
    match format {
        ImageFormat::Png => match image.color() {
            ColorType::Rgb32F | ColorType::Rgba32F => {
                DynamicImage::ImageRgba8(image.to_rgba8()).write_to(&mut cursor, format)?
            }
            _ => image.write_to(&mut cursor, format)?,
        },
        // The JPEG encoder only takes 8-bit gray or RGB, so alpha is dropped
        _ => match image.color() {
            ColorType::L8 | ColorType::Rgb8 => image.write_to(&mut cursor, format)?,
            _ => DynamicImage::ImageRgb8(image.to_rgb8()).write_to(&mut cursor, format)?,
        },
    }

    Ok(EncodedImage { bytes, mime_type })
}

/// Base64-encoded image ready to embed in a request body.
#[derive(Debug, Clone)]
pub struct ImageInput {
    /// Base64-encoded image bytes
    pub data: String,
    /// MIME type ("image/jpeg" or "image/png")
    pub mime_type: String,
}

impl ImageInput {
    pub fn from_encoded(encoded: &EncodedImage) -> Self {
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(&encoded.bytes),
            mime_type: encoded.mime_type.to_string(),
        }
    }

    /// Encode an in-memory image and wrap it as base64.
    pub fn from_image(
        image: &DynamicImage,
        source_format: ImageFormat,
    ) -> Result<Self, image::ImageError> {
        Ok(Self::from_encoded(&encode(image, source_format)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn sample_rgb() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(16, 16, |x, y| {
            Rgb([(x * 16) as u8, (y * 16) as u8, 128])
        }))
    }

    #[test]
    fn test_png_stays_png() {
        let encoded = encode(&sample_rgb(), ImageFormat::Png).unwrap();
        assert_eq!(encoded.mime_type, "image/png");
        assert_eq!(&encoded.bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_jpeg_stays_jpeg() {
        let encoded = encode(&sample_rgb(), ImageFormat::Jpeg).unwrap();
        assert_eq!(encoded.mime_type, "image/jpeg");
        assert_eq!(&encoded.bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_other_formats_coerced_to_jpeg() {
        for source in [ImageFormat::WebP, ImageFormat::Gif, ImageFormat::Bmp] {
            let encoded = encode(&sample_rgb(), source).unwrap();
            assert_eq!(encoded.mime_type, "image/jpeg");
            assert_eq!(&encoded.bytes[..2], &[0xFF, 0xD8]);
        }
    }

    #[test]
    fn test_alpha_source_coerced_to_jpeg_drops_alpha() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 100])));
        let encoded = encode(&rgba, ImageFormat::Gif).unwrap();
        assert_eq!(encoded.mime_type, "image/jpeg");
        let decoded = image::load_from_memory(&encoded.bytes).unwrap();
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn test_png_base64_round_trip_is_byte_identical() {
        let encoded = encode(&sample_rgb(), ImageFormat::Png).unwrap();
        let input = ImageInput::from_encoded(&encoded);
        assert_eq!(input.mime_type, "image/png");

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&input.data)
            .unwrap();
        assert_eq!(decoded, encoded.bytes);
    }
}
