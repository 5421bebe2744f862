//! Error types for apparel description.
//!
//! Describe failures are split by the step that failed so callers can tell a
//! bad input file from a bad reply, and each variant carries the raw context
//! (path, status, body, or text) needed to diagnose it.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for apparel operations.
#[derive(Error, Debug)]
pub enum ApparelError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A single describe call failed
    #[error("Describe error: {0}")]
    Describe(#[from] DescribeError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Failures of a single `describe` call. None of these are retried.
#[derive(Error, Debug)]
pub enum DescribeError {
    /// The image path does not resolve to a file
    #[error("Image not found: {0}")]
    ImageNotFound(PathBuf),

    /// The file exists but could not be read, decoded, or re-encoded
    #[error("Failed to load image {path}: {message}")]
    ImageDecode { path: PathBuf, message: String },

    /// Network failure or a non-2xx reply
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        status_code: Option<u16>,
        body: Option<String>,
    },

    /// The reply did not have the expected candidate/content/part shape
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String, body: String },

    /// The candidate text was not a JSON object
    #[error("Failed to decode apparel JSON: {message}")]
    SchemaDecode { message: String, text: String },
}

impl DescribeError {
    /// Raw response body returned by the endpoint, if the failure has one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Transport { body, .. } => body.as_deref(),
            Self::MalformedResponse { body, .. } => Some(body),
            _ => None,
        }
    }

    /// HTTP status code of the failed request, if one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport { status_code, .. } => *status_code,
            _ => None,
        }
    }
}

/// Convenience type alias for apparel results.
pub type Result<T> = std::result::Result<T, ApparelError>;

/// Convenience type alias for describe results.
pub type DescribeResult<T> = std::result::Result<T, DescribeError>;
