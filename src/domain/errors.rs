// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("catalog contains no articles")]
    EmptyCatalog,
    #[error("malformed price-per-unit text: {0:?}")]
    MalformedPriceText(String),
    #[error("malformed short description: {0:?}")]
    MalformedDescriptionText(String),
}
