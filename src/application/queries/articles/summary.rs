use super::ArticleQueryService;
use crate::application::{dto::ArticleSummaryDto, error::ApplicationResult};
use crate::domain::catalog::summarize;
use rust_decimal::Decimal;

pub struct ArticleSummaryQuery {
    pub url: Option<String>,
    pub price: Option<Decimal>,
}

impl ArticleQueryService {
    /// Answer all three article queries from a single catalog fetch.
    pub async fn summary(&self, query: ArticleSummaryQuery) -> ApplicationResult<ArticleSummaryDto> {
        let price = self.resolve_price(query.price);
        let catalog = self.load_catalog(query.url.as_deref()).await?;
        let summary = summarize(&catalog, price)?;
        Ok(summary.into())
    }
}
