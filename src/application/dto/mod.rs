pub mod articles;

pub use articles::{
    ArticleProductDto, ArticleSummaryDto, ConventionReportDto, ConventionViolationDto,
    MinMaxPricePerLitreDto, project_products,
};
