use super::ArticleQueryService;
use crate::application::{dto::ConventionReportDto, error::ApplicationResult};
use crate::domain::catalog::audit_conventions;

pub struct CatalogConventionsQuery {
    pub url: Option<String>,
}

impl ArticleQueryService {
    pub async fn catalog_conventions(
        &self,
        query: CatalogConventionsQuery,
    ) -> ApplicationResult<ConventionReportDto> {
        let catalog = self.load_catalog(query.url.as_deref()).await?;
        let report = audit_conventions(&catalog);
        if !report.is_conforming() {
            tracing::warn!(
                violations = report.violations.len(),
                "catalog deviates from the expected text conventions"
            );
        }
        Ok(report.into())
    }
}
