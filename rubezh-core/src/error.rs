//! Core error types
//!
//! Segmentation itself is total over arbitrary text and never fails; only
//! engine construction (configuration parsing, pattern compilation) can.

use thiserror::Error;

/// Errors raised while building a segmentation engine
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration could not be parsed
    #[error("configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration parsed but is semantically invalid
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A rule pattern failed to compile
    #[error("invalid pattern for rule '{name}': {source}")]
    Pattern {
        /// Name of the offending rule
        name: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
