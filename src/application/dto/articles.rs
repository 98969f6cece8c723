// src/application/dto/articles.rs
use crate::domain::catalog::{
    Article, CatalogSummary, ConventionReport, ConventionViolation, PricePerLitreExtremes, Product,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One article flattened together with its product's identifying fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleProductDto {
    pub product_id: i64,
    pub article_id: i64,
    pub product_brand_name: String,
    pub product_name: String,
    #[serde(default)]
    pub product_description: Option<String>,
    pub article_short_description: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 17.99)]
    pub price: Decimal,
    pub unit: String,
    pub price_per_unit_text: String,
    pub image: String,
}

impl ArticleProductDto {
    pub fn from_pair(product: &Product, article: &Article) -> Self {
        Self {
            product_id: product.id.into(),
            article_id: article.id.into(),
            product_brand_name: product.brand_name.clone(),
            product_name: product.name.clone(),
            product_description: product.description.clone(),
            article_short_description: article.short_description.clone(),
            price: article.price,
            unit: article.unit.clone(),
            price_per_unit_text: article.price_per_unit_text.clone(),
            image: article.image.clone(),
        }
    }
}

/// Flatten query winners into response records, one per article.
pub fn project_products(products: &[Product]) -> Vec<ArticleProductDto> {
    products
        .iter()
        .flat_map(|product| {
            product
                .articles
                .iter()
                .map(move |article| ArticleProductDto::from_pair(product, article))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MinMaxPricePerLitreDto {
    /// Article(s) with the lowest price per litre.
    pub min_price: Vec<ArticleProductDto>,
    /// Article(s) with the highest price per litre.
    pub max_price: Vec<ArticleProductDto>,
}

impl From<PricePerLitreExtremes> for MinMaxPricePerLitreDto {
    fn from(extremes: PricePerLitreExtremes) -> Self {
        Self {
            min_price: project_products(&extremes.cheapest),
            max_price: project_products(&extremes.most_expensive),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryDto {
    pub min_and_max_prices_per_litre: MinMaxPricePerLitreDto,
    pub by_price: Vec<ArticleProductDto>,
    pub most_bottles: Vec<ArticleProductDto>,
}

impl From<CatalogSummary> for ArticleSummaryDto {
    fn from(summary: CatalogSummary) -> Self {
        Self {
            min_and_max_prices_per_litre: summary.price_per_litre.into(),
            by_price: project_products(&summary.by_price),
            most_bottles: project_products(&summary.most_bottles),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConventionViolationDto {
    pub product_id: i64,
    pub article_id: i64,
    /// Name of the offending field, `pricePerUnitText` or `shortDescription`.
    pub field: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConventionReportDto {
    pub products: usize,
    pub articles: usize,
    pub conforming: bool,
    pub violations: Vec<ConventionViolationDto>,
}

impl From<ConventionReport> for ConventionReportDto {
    fn from(report: ConventionReport) -> Self {
        let conforming = report.is_conforming();
        let violations = report
            .violations
            .into_iter()
            .map(|(product_id, article_id, violation)| ConventionViolationDto {
                product_id: product_id.into(),
                article_id: article_id.into(),
                field: match violation {
                    ConventionViolation::PricePerUnitText => "pricePerUnitText",
                    ConventionViolation::ShortDescription => "shortDescription",
                }
                .to_string(),
            })
            .collect();

        Self {
            products: report.products,
            articles: report.articles,
            conforming,
            violations,
        }
    }
}
