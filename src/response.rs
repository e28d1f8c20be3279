//! Status and body helpers shared by the handlers.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Body of a failed lookup.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of a rejected write.
#[derive(Serialize, ToSchema)]
pub struct ErrorsBody {
    pub errors: Vec<String>,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub fn error_body(message: &str) -> ErrorBody {
    ErrorBody {
        error: message.to_string(),
    }
}

pub fn errors_body(messages: &[&str]) -> ErrorsBody {
    ErrorsBody {
        errors: messages.iter().map(|m| m.to_string()).collect(),
    }
}
