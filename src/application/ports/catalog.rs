// src/application/ports/catalog.rs
use crate::application::ApplicationResult;
use crate::domain::catalog::Product;
use async_trait::async_trait;

/// Source of the product catalog the queries run against.
///
/// Implementations must collapse every transport, status and decoding
/// failure into [`ApplicationError::Retrieval`](crate::application::error::ApplicationError::Retrieval)
/// and never hand back a partially decoded catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self, url: &str) -> ApplicationResult<Vec<Product>>;
}
