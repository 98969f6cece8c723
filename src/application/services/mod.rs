// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    ports::catalog::CatalogSource,
    queries::articles::{ArticleQueryService, CatalogDefaults},
};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(catalog_source: Arc<dyn CatalogSource>, defaults: CatalogDefaults) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&catalog_source),
            defaults,
        ));

        Self { article_queries }
    }
}
