//! Image stages that run before the request is sent:
//! - **decode**: load an image from disk and detect its format
//! - **encode**: re-encode as JPEG/PNG and wrap as base64

pub mod decode;
pub mod encode;

pub use decode::{DecodedImage, ImageDecoder};
pub use encode::{encode, EncodedImage, ImageInput};
