use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleProductDto, project_products},
    error::ApplicationResult,
};
use crate::domain::catalog::articles_with_most_bottles;

pub struct MostBottlesQuery {
    pub url: Option<String>,
}

impl ArticleQueryService {
    pub async fn articles_with_most_bottles(
        &self,
        query: MostBottlesQuery,
    ) -> ApplicationResult<Vec<ArticleProductDto>> {
        let catalog = self.load_catalog(query.url.as_deref()).await?;
        let winners = articles_with_most_bottles(&catalog)?;
        Ok(project_products(&winners))
    }
}
