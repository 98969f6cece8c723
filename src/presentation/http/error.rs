use crate::application::{
    ApplicationResult,
    error::{ApplicationError, RETRIEVAL_FAILURE_MESSAGE},
};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Retrieval => {
                Self::new(StatusCode::BAD_GATEWAY, RETRIEVAL_FAILURE_MESSAGE.to_string())
            }
            ApplicationError::Domain(domain_err) => {
                let status = match domain_err {
                    DomainError::EmptyCatalog => StatusCode::UNPROCESSABLE_ENTITY,
                    DomainError::MalformedPriceText(_)
                    | DomainError::MalformedDescriptionText(_) => StatusCode::BAD_GATEWAY,
                };
                tracing::warn!(error = %domain_err, "catalog query failed");
                Self::new(status, domain_err.to_string())
            }
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
