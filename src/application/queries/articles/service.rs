use std::sync::Arc;

use rust_decimal::Decimal;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::catalog::CatalogSource,
};
use crate::domain::catalog::Product;

/// Fallback source URL and comparison price used when a request omits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogDefaults {
    pub url: String,
    pub price: Decimal,
}

pub struct ArticleQueryService {
    pub(super) source: Arc<dyn CatalogSource>,
    pub(super) defaults: CatalogDefaults,
}

impl ArticleQueryService {
    pub fn new(source: Arc<dyn CatalogSource>, defaults: CatalogDefaults) -> Self {
        Self { source, defaults }
    }

    pub fn defaults(&self) -> &CatalogDefaults {
        &self.defaults
    }

    /// Fetch one catalog snapshot from the requested or default URL.
    pub(super) async fn load_catalog(&self, url: Option<&str>) -> ApplicationResult<Vec<Product>> {
        let url = self.resolve_url(url)?;
        let catalog = self.source.fetch_catalog(url).await?;
        tracing::debug!(url, products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Requested URL, or the configured one when blank. A non-http(s) URL
    /// cannot be fetched and is reported like any other retrieval failure.
    pub(super) fn resolve_url<'a>(&'a self, url: Option<&'a str>) -> ApplicationResult<&'a str> {
        match url.map(str::trim) {
            None | Some("") => Ok(self.defaults.url.as_str()),
            Some(value) if value.starts_with("http://") || value.starts_with("https://") => {
                Ok(value)
            }
            Some(value) => {
                tracing::warn!(url = value, "catalog url is not an absolute http(s) URL");
                Err(ApplicationError::retrieval())
            }
        }
    }

    pub(super) fn resolve_price(&self, price: Option<Decimal>) -> Decimal {
        price.unwrap_or(self.defaults.price)
    }
}
