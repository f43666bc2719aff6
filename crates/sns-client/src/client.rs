//! Amazon SNS client for mobile push operations.

use crate::error::SnsError;
use crate::provider::PushProvider;
use crate::types::SnsClientConfig;
use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::BehaviorVersion;
use aws_sdk_sns::config::{Credentials, Region};
use aws_sdk_sns::error::DisplayErrorContext;
use aws_sdk_sns::Client;
use secrecy::ExposeSecret;
use tracing::{debug, info, instrument, warn};

/// Message structure that makes SNS read the message as per-protocol JSON.
const JSON_MESSAGE_STRUCTURE: &str = "json";

/// Amazon SNS client.
#[derive(Clone)]
pub struct SnsClient {
    client: Client,
}

impl SnsClient {
    /// Build a client from explicit settings.
    ///
    /// Falls back to the default AWS credential chain (environment, profile,
    /// instance role) when no static credentials are configured.
    pub async fn new(config: &SnsClientConfig) -> Result<Self, SnsError> {
        if config.region.trim().is_empty() {
            return Err(SnsError::Config("AWS region must not be empty".into()));
        }

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(config.timeout)
                    .build(),
            )
            .retry_config(RetryConfig::standard().with_max_attempts(config.max_attempts.max(1)));

        if let Some(credentials) = &config.credentials {
            loader = loader.credentials_provider(Credentials::new(
                credentials.access_key_id.clone(),
                credentials.secret_access_key.expose_secret().clone(),
                None,
                None,
                "push-notification-service",
            ));
        } else {
            debug!("No static credentials configured, using default AWS credential chain");
        }

        if let Some(url) = &config.endpoint_url {
            loader = loader.endpoint_url(url.clone());
        }

        let sdk_config = loader.load().await;

        info!(
            region = %config.region,
            endpoint_url = ?config.endpoint_url,
            "Initialized SNS client"
        );

        Ok(Self::from_sdk(Client::new(&sdk_config)))
    }

    /// Wrap an already configured SDK client.
    pub fn from_sdk(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PushProvider for SnsClient {
    #[instrument(skip(self, token))]
    async fn create_platform_endpoint(
        &self,
        application_arn: &str,
        token: &str,
    ) -> Result<String, SnsError> {
        let output = self
            .client
            .create_platform_endpoint()
            .platform_application_arn(application_arn)
            .token(token)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                warn!(error = %message, "SNS create platform endpoint failed");
                SnsError::CreateEndpoint(message)
            })?;

        let endpoint_arn = output
            .endpoint_arn()
            .map(str::to_string)
            .ok_or(SnsError::MissingEndpointArn)?;

        debug!(endpoint_arn = %endpoint_arn, "Platform endpoint created");
        Ok(endpoint_arn)
    }

    #[instrument(skip(self, message))]
    async fn publish(&self, target_arn: &str, message: &str) -> Result<String, SnsError> {
        let output = self
            .client
            .publish()
            .target_arn(target_arn)
            .message_structure(JSON_MESSAGE_STRUCTURE)
            .message(message)
            .send()
            .await
            .map_err(|e| SnsError::Publish(DisplayErrorContext(&e).to_string()))?;

        let message_id = output.message_id().unwrap_or_default().to_string();
        debug!(message_id = %message_id, "Message published");
        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StaticCredentials;
    use secrecy::SecretString;
    use std::time::Duration;

    fn unreachable_config() -> SnsClientConfig {
        SnsClientConfig {
            region: "ap-southeast-2".into(),
            // Nothing listens on port 1; connections are refused immediately
            endpoint_url: Some("http://127.0.0.1:1".into()),
            credentials: Some(StaticCredentials {
                access_key_id: "AKIDEXAMPLE".into(),
                secret_access_key: SecretString::new("secret".into()),
            }),
            timeout: Duration::from_secs(5),
            max_attempts: 1,
        }
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = SnsClient::new(&unreachable_config()).await;
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_client_rejects_empty_region() {
        let config = SnsClientConfig {
            region: "  ".into(),
            ..unreachable_config()
        };

        let result = SnsClient::new(&config).await;
        assert!(matches!(result, Err(SnsError::Config(_))));
    }

    #[tokio::test]
    async fn test_create_endpoint_unreachable_provider() {
        let client = SnsClient::new(&unreachable_config()).await.unwrap();

        let result = client
            .create_platform_endpoint(
                "arn:aws:sns:ap-southeast-2:000000000000:app/GCM/Push-Notifications-Android",
                "device-token",
            )
            .await;

        assert!(matches!(result, Err(SnsError::CreateEndpoint(_))));
    }

    #[tokio::test]
    async fn test_publish_unreachable_provider() {
        let client = SnsClient::new(&unreachable_config()).await.unwrap();

        let result = client
            .publish(
                "arn:aws:sns:ap-southeast-2:000000000000:endpoint/GCM/app/1234",
                r#"{"GCM":"{}"}"#,
            )
            .await;

        assert!(matches!(result, Err(SnsError::Publish(_))));
    }
}
