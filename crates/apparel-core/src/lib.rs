//! Apparel Core - structured apparel attributes from a single image.
//!
//! An image is decoded, re-encoded as JPEG or PNG, and sent inline to the
//! Gemini `generateContent` API together with a prompt that embeds a fixed
//! JSON schema. The model's JSON reply is returned as an [`ApparelResult`].
//!
//! ```text
//! Image → Decode → Encode (JPEG/PNG, base64) → Prompt + Schema → POST → JSON
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use apparel_core::{ApparelDescriptor, Config};
//!
//! #[tokio::main]
//! async fn main() -> apparel_core::Result<()> {
//!     let config = Config::load()?;
//!     let descriptor = ApparelDescriptor::from_config(&config.gemini, None, None)?;
//!
//!     let result = descriptor.describe("./jacket.jpg".as_ref()).await?;
//!     println!("Category: {:?}", result.category());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod gemini;
pub mod output;
pub mod pipeline;
pub mod schema;
pub mod types;

pub use config::Config;
pub use descriptor::ApparelDescriptor;
pub use error::{ApparelError, ConfigError, DescribeError, DescribeResult, Result};
pub use gemini::{HttpReply, ReqwestTransport, Transport};
pub use output::OutputWriter;
pub use schema::{
    ApparelSchema, Category, Fit, Neckline, Pattern, SchemaEnum, SleeveLength, TargetAudience,
};
pub use types::ApparelResult;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
