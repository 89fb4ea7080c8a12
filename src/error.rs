use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;
use crate::models::ErrorResponse;

/// Errors returned by the HTTP layer
///
/// The relationship engine itself never fails; these only cover malformed
/// or invalid requests.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("limit must be between 1 and {max}, got {limit}")]
    LimitOutOfRange { limit: u16, max: u16 },
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_failed",
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::InvalidQuery(_) => "invalid_query",
            ApiError::LimitOutOfRange { .. } => "invalid_limit",
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    ApiError::InvalidQuery(err.to_string()).into()
}
