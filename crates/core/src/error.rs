//! Error types for lesbar operations.
//!
//! Scoring never fails: insufficient input maps to the unscored sentinel
//! instead of an error. [`LesbarError`] covers the collaborators around the
//! scoring core: fetching, sitemap and file I/O, HTML parsing and
//! configuration files.
//!
//! # Example
//!
//! ```rust
//! use lesbar_core::{LesbarError, Result};
//!
//! fn sitemap_name(path: &str) -> Result<&str> {
//!     if path.is_empty() {
//!         return Err(LesbarError::ConfigError("empty sitemap path".to_string()));
//!     }
//!     Ok(path)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lesbar operations.
#[derive(Error, Debug)]
pub enum LesbarError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and non-success status codes.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// No article text could be extracted from the document.
    #[error("No content could be extracted from the document")]
    NoContent,

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read and write errors.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid analyzer configuration or configuration file.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Sitemap content could not be decoded.
    #[error("Sitemap error: {0}")]
    SitemapError(String),

    /// JSON serialization errors.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Result type alias for LesbarError.
pub type Result<T> = std::result::Result<T, LesbarError>;
