//! Catalog provider trait and structured error types.
//!
//! The CatalogProvider trait abstracts over the entry source so the TUI
//! worker can be driven by a mock in tests instead of the live REST
//! endpoint.

use thiserror::Error;

use crate::pokemon::Pokemon;

/// Structured error types for catalog fetches.
///
/// Consumers display these as plain text (`Display`); the variants exist
/// so the message names the actual failure rather than a generic one.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),

    #[error("catalog returned HTTP {status} for index {index}")]
    HttpStatus { status: u16, index: u32 },

    #[error("malformed catalog response: {0}")]
    Decode(String),

    #[error("catalog index must be >= 1")]
    InvalidIndex,
}

/// Trait for catalog entry sources.
///
/// Implementations are expected to perform exactly one request per call:
/// retry policy, if any, belongs to the caller.
pub trait CatalogProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch the entry at `index` (1-based).
    fn fetch(&self, index: u32) -> Result<Pokemon, CatalogError>;
}
