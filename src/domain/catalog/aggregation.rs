// src/domain/catalog/aggregation.rs
//! Catalog-wide queries built on the text parsers and the extremum collector.
//!
//! Every winner is returned as a freshly built [`Product`] holding only the
//! winning article; the input catalog is only ever borrowed.
use super::entity::{Product, ProductArticle, flatten};
use super::extremum::{Direction, collect_extremes};
use super::parsing::{conforms_to_description_convention, conforms_to_price_convention};
use super::value_objects::{ArticleId, ProductId};
use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricePerLitreExtremes {
    pub cheapest: Vec<Product>,
    pub most_expensive: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub price_per_litre: PricePerLitreExtremes,
    pub by_price: Vec<Product>,
    pub most_bottles: Vec<Product>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConventionViolation {
    PricePerUnitText,
    ShortDescription,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionReport {
    pub products: usize,
    pub articles: usize,
    pub violations: Vec<(ProductId, ArticleId, ConventionViolation)>,
}

impl ConventionReport {
    pub fn is_conforming(&self) -> bool {
        self.violations.is_empty()
    }
}

pub fn min_and_max_price_per_litre(catalog: &[Product]) -> DomainResult<PricePerLitreExtremes> {
    ensure_has_articles(catalog)?;

    let cheapest = select(catalog, Direction::Min, |pair| pair.article.price_per_unit())?;
    let most_expensive = select(catalog, Direction::Max, |pair| pair.article.price_per_unit())?;

    tracing::debug!(
        cheapest = cheapest.len(),
        most_expensive = most_expensive.len(),
        "price per litre extremes selected"
    );

    Ok(PricePerLitreExtremes {
        cheapest,
        most_expensive,
    })
}

pub fn articles_by_price(catalog: &[Product], price: Decimal) -> DomainResult<Vec<Product>> {
    let mut matches = flatten(catalog)
        .filter(|pair| pair.article.price == price)
        .map(|pair| {
            pair.article
                .price_per_unit()
                .map(|per_litre| (per_litre, pair.to_narrowed_product()))
        })
        .collect::<DomainResult<Vec<(Decimal, Product)>>>()?;

    matches.sort_by(|(left, _), (right, _)| left.cmp(right));

    tracing::debug!(%price, matches = matches.len(), "articles matched by price");

    Ok(matches.into_iter().map(|(_, product)| product).collect())
}

pub fn articles_with_most_bottles(catalog: &[Product]) -> DomainResult<Vec<Product>> {
    ensure_has_articles(catalog)?;

    let winners = select(catalog, Direction::Max, |pair| pair.article.bottle_count())?;
    tracing::debug!(winners = winners.len(), "most bottles selected");
    Ok(winners)
}

/// Run all three queries against one catalog snapshot.
pub fn summarize(catalog: &[Product], price: Decimal) -> DomainResult<CatalogSummary> {
    Ok(CatalogSummary {
        price_per_litre: min_and_max_price_per_litre(catalog)?,
        by_price: articles_by_price(catalog, price)?,
        most_bottles: articles_with_most_bottles(catalog)?,
    })
}

/// Check every article's free-text fields against the feed conventions.
pub fn audit_conventions(catalog: &[Product]) -> ConventionReport {
    let mut articles = 0;
    let mut violations = Vec::new();

    for pair in flatten(catalog) {
        articles += 1;
        let ids = (pair.product.id, pair.article.id);
        if !conforms_to_price_convention(&pair.article.price_per_unit_text) {
            violations.push((ids.0, ids.1, ConventionViolation::PricePerUnitText));
        }
        if !conforms_to_description_convention(&pair.article.short_description) {
            violations.push((ids.0, ids.1, ConventionViolation::ShortDescription));
        }
    }

    ConventionReport {
        products: catalog.len(),
        articles,
        violations,
    }
}

fn ensure_has_articles(catalog: &[Product]) -> DomainResult<()> {
    if catalog.iter().all(|product| product.articles.is_empty()) {
        return Err(DomainError::EmptyCatalog);
    }
    Ok(())
}

/// Select the tied extremes for one derived key and materialise them as
/// narrowed products ordered by product name.
fn select<'a, K, F>(catalog: &'a [Product], direction: Direction, key: F) -> DomainResult<Vec<Product>>
where
    K: Ord,
    F: Fn(&ProductArticle<'a>) -> DomainResult<K>,
{
    let winners = collect_extremes(
        direction,
        flatten(catalog).map(|pair| key(&pair).map(|value| (pair, value))),
    )?;

    let mut products: Vec<Product> = winners
        .iter()
        .map(ProductArticle::to_narrowed_product)
        .collect();
    products.sort_by(|left, right| left.name.cmp(&right.name));
    Ok(products)
}
