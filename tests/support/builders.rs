// tests/support/builders.rs
use catalog_insights::domain::catalog::{Article, ArticleId, Product, ProductId};
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).expect("valid decimal literal in test")
}

pub struct ArticleBuilder {
    id: i64,
    short_description: String,
    price: Decimal,
    unit: String,
    price_per_unit_text: String,
    image: String,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            short_description: "20 x 0,5L (Glas)".into(),
            price: dec("17.99"),
            unit: "Liter".into(),
            price_per_unit_text: "(1,80 €/Liter)".into(),
            image: format!("https://images.example/{id}.png"),
        }
    }

    pub fn price(mut self, price: &str) -> Self {
        self.price = dec(price);
        self
    }

    /// Price per litre in the feed's comma notation, e.g. `"2,10"`.
    pub fn per_litre(mut self, amount: &str) -> Self {
        self.price_per_unit_text = format!("({amount} €/Liter)");
        self
    }

    pub fn price_per_unit_text(mut self, text: impl Into<String>) -> Self {
        self.price_per_unit_text = text.into();
        self
    }

    pub fn bottles(mut self, count: u32) -> Self {
        self.short_description = format!("{count} x 0,5L (Glas)");
        self
    }

    pub fn short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = text.into();
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId(self.id),
            short_description: self.short_description,
            price: self.price,
            unit: self.unit,
            price_per_unit_text: self.price_per_unit_text,
            image: self.image,
        }
    }
}

pub struct ProductBuilder {
    id: i64,
    brand_name: String,
    name: String,
    description: Option<String>,
    articles: Vec<Article>,
}

impl ProductBuilder {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            brand_name: format!("{name} Brauerei"),
            name,
            description: None,
            articles: Vec::new(),
        }
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn article(mut self, article: ArticleBuilder) -> Self {
        self.articles.push(article.build());
        self
    }

    pub fn build(self) -> Product {
        Product {
            id: ProductId(self.id),
            brand_name: self.brand_name,
            name: self.name,
            description: self.description,
            articles: self.articles,
        }
    }
}

/// Two products: "Alpha" with two articles tied at 1,00 €/Liter and
/// "Beta" with one article at 5,00 €/Liter priced 17.99.
pub fn tied_catalog() -> Vec<Product> {
    vec![
        ProductBuilder::new(1, "Alpha")
            .description("Helles aus Franken")
            .article(ArticleBuilder::new(10).price("10.00").per_litre("1,00").bottles(20))
            .article(ArticleBuilder::new(11).price("12.00").per_litre("1,00").bottles(24))
            .build(),
        ProductBuilder::new(2, "Beta")
            .article(ArticleBuilder::new(20).price("17.99").per_litre("5,00").bottles(6))
            .build(),
    ]
}
