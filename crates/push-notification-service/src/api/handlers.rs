//! HTTP request handlers.

use super::types::{HealthResponse, MessageResponse, RegisterRequest, SendNotificationRequest};
use super::AppState;
use crate::error::ApiError;
use crate::registry::Platform;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{info, warn};

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let (user_count, registration_count) = state.gateway.store().counts().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        user_count,
        registration_count,
    })
}

/// Register a device push token for a user.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected registration request body");
        ApiError::BadRequest
    })?;

    let platform: Platform = request.platform.parse().map_err(|_| {
        warn!(platform = %request.platform, "Unknown platform in registration request");
        ApiError::InvalidPlatform
    })?;

    info!(user_id = %request.user_id, %platform, "Registration request received");

    state
        .gateway
        .register_endpoint(platform, &request.user_id, &request.token)
        .await
        .map_err(|_| ApiError::RegistrationFailed(platform))?;

    Ok(Json(MessageResponse::new(format!(
        "{} token registered successfully",
        platform.display_name()
    ))))
}

/// Send a notification to every device registered for a user.
///
/// Responds with success whether or not any delivery worked.
pub async fn send_notification(
    State(state): State<AppState>,
    payload: Result<Json<SendNotificationRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected send request body");
        ApiError::BadRequest
    })?;

    info!(user_id = %request.user_id, "Send notification request received");

    state
        .gateway
        .publish(
            &request.user_id,
            &request.notification_title,
            &request.notification_body,
        )
        .await;

    Ok(Json(MessageResponse::new(format!(
        "Notification title '{}' and message '{}' sent to user '{}'",
        request.notification_title, request.notification_body, request.user_id
    ))))
}
