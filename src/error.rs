//! Typed errors and HTTP mapping.

use crate::response::{error_body, errors_body};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Message returned for every rejected create, whatever the cause.
pub const VALIDATION_MESSAGE: &str = "validation errors";

pub const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(&'static str),
    /// The payload describes the internal cause; callers only ever see [`VALIDATION_MESSAGE`].
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(error_body(message))).into_response()
            }
            AppError::Validation(cause) => {
                tracing::debug!(%cause, "request rejected");
                (
                    StatusCode::BAD_REQUEST,
                    Json(errors_body(&[VALIDATION_MESSAGE])),
                )
                    .into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(error_body("internal server error")),
                )
                    .into_response()
            }
        }
    }
}
