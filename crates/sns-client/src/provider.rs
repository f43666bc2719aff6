//! Provider boundary used by the push gateway.

use crate::error::SnsError;
use async_trait::async_trait;

/// Push delivery provider.
///
/// Implemented by [`crate::SnsClient`] for Amazon SNS; tests substitute
/// recording fakes.
#[async_trait]
pub trait PushProvider: Send + Sync {
    /// Create a platform endpoint for `token` under `application_arn`.
    ///
    /// Returns the opaque endpoint ARN assigned by the provider.
    async fn create_platform_endpoint(
        &self,
        application_arn: &str,
        token: &str,
    ) -> Result<String, SnsError>;

    /// Publish a JSON-structured message to `target_arn`.
    ///
    /// Returns the provider message id.
    async fn publish(&self, target_arn: &str, message: &str) -> Result<String, SnsError>;
}
