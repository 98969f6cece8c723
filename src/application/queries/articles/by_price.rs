use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleProductDto, project_products},
    error::ApplicationResult,
};
use crate::domain::catalog::articles_by_price;
use rust_decimal::Decimal;

pub struct ArticlesByPriceQuery {
    pub url: Option<String>,
    pub price: Option<Decimal>,
}

impl ArticleQueryService {
    pub async fn articles_by_price(
        &self,
        query: ArticlesByPriceQuery,
    ) -> ApplicationResult<Vec<ArticleProductDto>> {
        let price = self.resolve_price(query.price);
        let catalog = self.load_catalog(query.url.as_deref()).await?;
        let matches = articles_by_price(&catalog, price)?;
        Ok(project_products(&matches))
    }
}
