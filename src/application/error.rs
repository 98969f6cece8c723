// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Message surfaced for every catalog retrieval failure, whatever the cause.
pub const RETRIEVAL_FAILURE_MESSAGE: &str = "Invalid JSON or timeout.";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid JSON or timeout.")]
    Retrieval,
}

impl ApplicationError {
    pub fn retrieval() -> Self {
        Self::Retrieval
    }
}
