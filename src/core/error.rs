//! Error handling for the gen-api-models template layer.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. Filters themselves degrade
//! silently on absent input; these variants cover the environment around them
//! (loading templates and configuration, rendering, strict response mapping).
//!
//! # Examples
//!
//! ```
//! use gen_api_models::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::template("missing template"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use thiserror::Error;

/// Result type for template layer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for template layer operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Template error
    #[error("Template error: {0}")]
    Template(String),

    /// Template engine error
    #[error("Template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A response status code with no wrapper mapping, raised in strict mode
    #[error("Unsupported response status code: {0}")]
    UnsupportedStatusCode(String),

    /// A parameter location tag outside the OpenAPI set
    #[error("Invalid parameter location: {0}")]
    InvalidLocation(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new template error
    pub fn template<S: Into<String>>(msg: S) -> Self {
        Self::Template(msg.into())
    }
}
