use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;

use crate::core::ModelError;
use crate::models::ErrorEnvelope;

/// Any fault raised while handling an ML request
///
/// Every variant renders as HTTP 500 with `{success: false, error}`; the
/// variants only exist so logs can tell the causes apart.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidPayload(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl error::ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorEnvelope::new(self.to_string()))
    }
}

/// Route JSON extraction failures into the 500 envelope
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &HttpRequest,
) -> actix_web::Error {
    tracing::warn!("JSON payload error on {}: {}", req.path(), err);
    ServiceError::InvalidPayload(err.to_string()).into()
}
