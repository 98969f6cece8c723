// tests/support/mocks.rs
use async_trait::async_trait;
use catalog_insights::application::{
    ApplicationResult, error::ApplicationError, ports::catalog::CatalogSource,
};
use catalog_insights::domain::catalog::Product;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Serves a fixed catalog and records every requested URL.
pub struct StaticCatalogSource {
    catalog: Vec<Product>,
    fetches: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl StaticCatalogSource {
    pub fn new(catalog: Vec<Product>) -> Self {
        Self {
            catalog,
            fetches: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_catalog(&self, url: &str) -> ApplicationResult<Vec<Product>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        Ok(self.catalog.clone())
    }
}

/// Fails every fetch the way a timed-out or undecodable source would.
pub struct FailingCatalogSource;

#[async_trait]
impl CatalogSource for FailingCatalogSource {
    async fn fetch_catalog(&self, _url: &str) -> ApplicationResult<Vec<Product>> {
        Err(ApplicationError::retrieval())
    }
}
