// src/domain/catalog/entity.rs
use super::parsing::{parse_bottle_count, parse_price_per_unit};
use super::value_objects::{ArticleId, ProductId};
use crate::domain::errors::DomainResult;
use rust_decimal::Decimal;

/// A purchasable variant of a product, e.g. a crate of 20 half-litre bottles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    /// Pack description such as `20 x 0,5L (Glas)`.
    pub short_description: String,
    pub price: Decimal,
    pub unit: String,
    /// Normalised price such as `(2,10 €/Liter)`.
    pub price_per_unit_text: String,
    pub image: String,
}

impl Article {
    pub fn price_per_unit(&self) -> DomainResult<Decimal> {
        parse_price_per_unit(&self.price_per_unit_text)
    }

    pub fn bottle_count(&self) -> DomainResult<u32> {
        parse_bottle_count(&self.short_description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub brand_name: String,
    pub name: String,
    pub description: Option<String>,
    pub articles: Vec<Article>,
}

impl Product {
    /// Iterate over every article of this product paired with its parent.
    pub fn article_pairs(&self) -> impl Iterator<Item = ProductArticle<'_>> {
        self.articles
            .iter()
            .map(move |article| ProductArticle::new(self, article))
    }
}

/// Borrowed view of one article together with the product it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct ProductArticle<'a> {
    pub product: &'a Product,
    pub article: &'a Article,
}

impl<'a> ProductArticle<'a> {
    pub fn new(product: &'a Product, article: &'a Article) -> Self {
        Self { product, article }
    }

    /// Build a new product carrying only this article. The catalog the view
    /// borrows from is left untouched.
    pub fn to_narrowed_product(&self) -> Product {
        Product {
            id: self.product.id,
            brand_name: self.product.brand_name.clone(),
            name: self.product.name.clone(),
            description: self.product.description.clone(),
            articles: vec![self.article.clone()],
        }
    }
}

/// Flatten a catalog into (product, article) views in catalog order.
pub fn flatten(catalog: &[Product]) -> impl Iterator<Item = ProductArticle<'_>> {
    catalog.iter().flat_map(Product::article_pairs)
}
