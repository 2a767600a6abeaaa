use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response}
};

use serde_json::json;
use thiserror::Error;

use crate::engine::pricing::PricingError;
use crate::engine::session::SessionError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown sport: {0}")]
    UnknownSport(String),

    #[error("Unexpected server error")]
    Unexpected,
}

impl AppError {

    pub fn bad_request<T: Into<String>>(msg: T) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        AppError::ValidationError(msg.into())
    }

}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::SlotConflict => AppError::bad_request(err.to_string()),
            StoreError::NotFound(_) => AppError::not_found(err.to_string()),
            StoreError::NotPending => AppError::validation(err.to_string()),
        }
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::UnknownSport(name) => AppError::UnknownSport(name),
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Pricing(e) => e.into(),
            SessionError::Closed | SessionError::NothingSelected => {
                AppError::validation(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),

            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::UnknownSport(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),

            AppError::Unexpected => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),

        };

        let body = Json(json!({
            "success": false,
            "error": {
                "message": message,
                "kind": format!("{:?}",self)
            }
        }));

        (status, body).into_response()
    }
}
