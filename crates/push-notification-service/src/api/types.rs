//! API request and response types.

use serde::{Deserialize, Serialize};

/// Request to register a device token for a user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Platform tag: "ios" or "android"
    pub platform: String,

    pub user_id: String,

    /// Push token issued to the device by APNs or Firebase
    pub token: String,
}

/// Request to send a notification to all of a user's devices.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationRequest {
    pub user_id: String,
    pub notification_title: String,
    pub notification_body: String,
}

/// Body of every register and send response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub user_count: usize,
    pub registration_count: usize,
}
