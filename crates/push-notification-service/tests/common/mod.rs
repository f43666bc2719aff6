//! Shared helpers for API integration tests.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use push_notification_service::{
    api::{create_router, AppState},
    ApnsEnvironment, PlatformApplications, PushGateway, RegistrationStore,
};
use sns_client::{PushProvider, SnsError};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const ANDROID_APP_ARN: &str =
    "arn:aws:sns:ap-southeast-2:000000000000:app/GCM/Push-Notifications-Android";
pub const IOS_APP_ARN: &str =
    "arn:aws:sns:ap-southeast-2:000000000000:app/APNS_SANDBOX/Push-Notifications-Apple";

/// Provider fake that hands out `arn-<token>` endpoints and records publishes.
#[derive(Default)]
pub struct FakeProvider {
    pub fail_create: bool,
    pub failing_target: Option<String>,
    pub created: Mutex<Vec<(String, String)>>,
    pub published: Mutex<Vec<(String, String)>>,
}

impl FakeProvider {
    pub fn published(&self) -> Vec<(String, String)> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushProvider for FakeProvider {
    async fn create_platform_endpoint(
        &self,
        application_arn: &str,
        token: &str,
    ) -> Result<String, SnsError> {
        self.created
            .lock()
            .unwrap()
            .push((application_arn.into(), token.into()));

        if self.fail_create {
            return Err(SnsError::CreateEndpoint("AuthorizationError".into()));
        }
        Ok(format!("arn-{}", token))
    }

    async fn publish(&self, target_arn: &str, message: &str) -> Result<String, SnsError> {
        self.published
            .lock()
            .unwrap()
            .push((target_arn.into(), message.into()));

        if self.failing_target.as_deref() == Some(target_arn) {
            return Err(SnsError::Publish("EndpointDisabled".into()));
        }
        Ok("message-id".into())
    }
}

/// Build a router over `provider` along with a handle to its store.
pub fn create_test_app(provider: Arc<FakeProvider>) -> (Router, RegistrationStore) {
    let store = RegistrationStore::new();
    let applications = PlatformApplications {
        android_arn: ANDROID_APP_ARN.into(),
        ios_arn: IOS_APP_ARN.into(),
        apns: ApnsEnvironment::Sandbox,
    };
    let gateway = PushGateway::new(provider, store.clone(), applications);

    (create_router(AppState::new(gateway)), store)
}

/// POST a raw JSON body.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
