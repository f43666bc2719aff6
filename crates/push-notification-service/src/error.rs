//! Error types for the notification service.

use crate::api::MessageResponse;
use crate::registry::Platform;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sns_client::SnsError;
use thiserror::Error;

/// Failures of a single gateway operation.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Push provider error: {0}")]
    Provider(#[from] SnsError),

    #[error("Payload serialization error: {0}")]
    Payload(#[from] serde_json::Error),
}

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad registration request or request")]
    BadRequest,

    #[error("Missing valid platform type")]
    InvalidPlatform,

    #[error("{} token failed to update", .0.display_name())]
    RegistrationFailed(Platform),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest | ApiError::InvalidPlatform => StatusCode::BAD_REQUEST,
            ApiError::RegistrationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
