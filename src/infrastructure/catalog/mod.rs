// src/infrastructure/catalog/mod.rs
pub mod decode;
pub mod error;
pub mod http;

pub use decode::decode_catalog;
pub use error::CatalogFetchError;
pub use http::HttpCatalogSource;
