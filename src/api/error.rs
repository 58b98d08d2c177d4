use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::protocol::ErrorResponse;
use super::validate::UrlError;
use crate::tree::MapError;

/// Everything a handler can fail with, mapped onto HTTP statuses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be extracted (bad JSON, wrong types, wrong content type).
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Validation(#[from] UrlError),
    #[error(transparent)]
    Store(#[from] MapError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(MapError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(MapError::AlreadyExists(_)) => StatusCode::CONFLICT,
            ApiError::Store(MapError::Empty) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(message) => message.clone(),
            ApiError::Validation(e) => e.to_string(),
            ApiError::Store(MapError::NotFound(_)) => "Link not found".to_string(),
            ApiError::Store(MapError::AlreadyExists(_)) => "Alias is already taken".to_string(),
            ApiError::Store(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        (
            status,
            Json(ErrorResponse {
                error: self.message(),
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    }
}
