//! Error responses of the API, shaped like the DRF responses the client expects.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found.")]
    NotFound,

    /// A rejected field, rendered as `{ "<field>": ["<message>"] }`.
    #[error("{field}: {message}")]
    Field { field: &'static str, message: String },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl ApiError {
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        ApiError::Field {
            field,
            message: message.into(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Field { .. } => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::NotFound => json!({ "detail": "Not found." }),
            ApiError::Field { field, message } => json!({ *field: [message] }),
            ApiError::Database(err) => {
                log::error!("database error: {}", err);
                json!({ "detail": "Internal server error." })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
