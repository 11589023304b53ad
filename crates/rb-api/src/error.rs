//! Boundary mapping from core errors to response bodies.
//!
//! Every API failure is rendered as HTTP 200 with an `{"error": ...}` body;
//! existing clients read the body, not the status line.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use rb_core::error::AppError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] AppError),

    /// The body or query string did not decode into the expected fields.
    #[error("invalid request: {0}")]
    Malformed(String),

    #[error("template rendering failed: {0}")]
    Render(#[from] rb_ui::RenderError),
}

impl ApiError {
    pub fn malformed(err: impl std::fmt::Display) -> Self {
        ApiError::Malformed(err.to_string())
    }

    /// What the client is allowed to see.
    fn public_message(&self) -> String {
        match self {
            ApiError::Core(AppError::NotFound(entity)) => format!("{entity} not found"),
            ApiError::Malformed(_) => self.to_string(),
            ApiError::Core(AppError::Internal(_)) | ApiError::Render(_) => {
                "internal server error".to_string()
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self, ApiError::Core(AppError::Internal(_)) | ApiError::Render(_)) {
            log::error!("{self}");
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.public_message() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rb_core::error::Entity;

    #[test]
    fn not_found_names_the_entity() {
        let err = ApiError::from(AppError::NotFound(Entity::Reply));
        assert_eq!(err.public_message(), "reply not found");
        assert_eq!(err.status_code(), StatusCode::OK);
    }

    #[test]
    fn internal_details_stay_internal() {
        let err = ApiError::from(AppError::Internal("connection refused at 10.0.0.3".into()));
        assert_eq!(err.public_message(), "internal server error");
    }
}
