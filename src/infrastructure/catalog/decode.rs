// src/infrastructure/catalog/decode.rs
//! Catalog JSON decoding with case-insensitive field names.
//!
//! Object keys are lower-cased before the typed records are read, so
//! `brandName`, `BrandName` and `brandname` all land in the same field.
use super::error::CatalogFetchError;
use crate::domain::catalog::{Article, ArticleId, Product, ProductId};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: i64,
    #[serde(rename = "brandname", default)]
    brand_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "descriptiontext", default)]
    description_text: Option<String>,
    #[serde(default)]
    articles: Option<Vec<ArticleRecord>>,
}

#[derive(Debug, Deserialize)]
struct ArticleRecord {
    id: i64,
    #[serde(rename = "shortdescription", default)]
    short_description: Option<String>,
    price: Decimal,
    #[serde(default)]
    unit: Option<String>,
    #[serde(rename = "priceperunittext", default)]
    price_per_unit_text: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

impl From<ArticleRecord> for Article {
    fn from(record: ArticleRecord) -> Self {
        Self {
            id: ArticleId(record.id),
            short_description: record.short_description.unwrap_or_default(),
            price: record.price,
            unit: record.unit.unwrap_or_default(),
            price_per_unit_text: record.price_per_unit_text.unwrap_or_default(),
            image: record.image.unwrap_or_default(),
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: ProductId(record.id),
            brand_name: record.brand_name.unwrap_or_default(),
            name: record.name.unwrap_or_default(),
            description: record
                .description_text
                .filter(|text| !text.trim().is_empty()),
            articles: record
                .articles
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

pub fn decode_catalog(bytes: &[u8]) -> Result<Vec<Product>, CatalogFetchError> {
    let raw: Value = serde_json::from_slice(bytes)?;
    let records: Vec<ProductRecord> = serde_json::from_value(lowercase_keys(raw))?;
    Ok(records.into_iter().map(Into::into).collect())
}

fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), lowercase_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}
