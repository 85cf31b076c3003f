//! Domain layer error types
//!
//! Catalog-facing errors. Document-side failures (missing root,
//! malformed node, unavailable rule store) are modeled on the document
//! port and never reach the host: the engine absorbs them and degrades.

use thiserror::Error;

/// Main domain error type
#[derive(Error, Debug)]
pub enum DomainError {
    /// Theme not found in the catalog
    #[error("Theme not found: {0}")]
    ThemeNotFound(String),

    /// IO error (wrapped)
    #[error("IO error: {0}")]
    IoError(String),

    /// Theme file parse error
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}
