// src/infrastructure/catalog/http.rs
use super::{decode::decode_catalog, error::CatalogFetchError};
use crate::application::{
    ApplicationResult, error::ApplicationError, ports::catalog::CatalogSource,
};
use crate::domain::catalog::Product;
use async_trait::async_trait;
use reqwest::{Client, header::ACCEPT};
use std::time::Duration;

/// Fetches the catalog over HTTP with a bounded request time.
#[derive(Clone)]
pub struct HttpCatalogSource {
    client: Client,
}

impl HttpCatalogSource {
    pub fn new(timeout: Duration) -> Result<Self, CatalogFetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &str) -> Result<Vec<Product>, CatalogFetchError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogFetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        decode_catalog(&body)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self, url: &str) -> ApplicationResult<Vec<Product>> {
        self.fetch(url).await.map_err(|err| {
            tracing::warn!(url, error = %err, "catalog retrieval failed");
            ApplicationError::retrieval()
        })
    }
}
