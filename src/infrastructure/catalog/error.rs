// src/infrastructure/catalog/error.rs
use thiserror::Error;

/// Concrete reason a catalog fetch failed. Logged, then collapsed into the
/// uniform application-level retrieval failure.
#[derive(Debug, Error)]
pub enum CatalogFetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("invalid catalog JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
