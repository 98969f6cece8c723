use super::ArticleQueryService;
use crate::application::{dto::MinMaxPricePerLitreDto, error::ApplicationResult};
use crate::domain::catalog::min_and_max_price_per_litre;

pub struct MinMaxPricePerLitreQuery {
    pub url: Option<String>,
}

impl ArticleQueryService {
    pub async fn min_and_max_price_per_litre(
        &self,
        query: MinMaxPricePerLitreQuery,
    ) -> ApplicationResult<MinMaxPricePerLitreDto> {
        let catalog = self.load_catalog(query.url.as_deref()).await?;
        let extremes = min_and_max_price_per_litre(&catalog)?;
        Ok(extremes.into())
    }
}
