mod by_price;
mod conventions;
mod min_max;
mod most_bottles;
mod service;
mod summary;

pub use by_price::ArticlesByPriceQuery;
pub use conventions::CatalogConventionsQuery;
pub use min_max::MinMaxPricePerLitreQuery;
pub use most_bottles::MostBottlesQuery;
pub use service::{ArticleQueryService, CatalogDefaults};
pub use summary::ArticleSummaryQuery;
