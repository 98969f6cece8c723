// src/domain/catalog/mod.rs
pub mod aggregation;
pub mod entity;
pub mod extremum;
pub mod parsing;
pub mod value_objects;

pub use aggregation::{
    ConventionReport, ConventionViolation, CatalogSummary, PricePerLitreExtremes,
    articles_by_price, articles_with_most_bottles, audit_conventions,
    min_and_max_price_per_litre, summarize,
};
pub use entity::{Article, Product, ProductArticle};
pub use extremum::{Direction, ExtremumCollector, collect_extremes};
pub use parsing::{parse_bottle_count, parse_price_per_unit};
pub use value_objects::{ArticleId, ProductId};
