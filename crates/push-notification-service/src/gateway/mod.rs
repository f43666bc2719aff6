//! Push gateway: ties provider calls to the registration store.

mod payload;

pub use payload::{build_payload, ApnsEnvironment, GCM_KEY};

use crate::error::GatewayError;
use crate::registry::{Platform, Registration, RegistrationStore};
use futures::future::join_all;
use sns_client::PushProvider;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Platform application ARNs the gateway creates endpoints under.
#[derive(Debug, Clone, Default)]
pub struct PlatformApplications {
    pub android_arn: String,
    pub ios_arn: String,
    pub apns: ApnsEnvironment,
}

impl PlatformApplications {
    /// Application ARN for a platform.
    pub fn arn_for(&self, platform: Platform) -> &str {
        match platform {
            Platform::Android => &self.android_arn,
            Platform::Ios => &self.ios_arn,
        }
    }
}

/// Registers devices with the push provider and fans notifications out to them.
#[derive(Clone)]
pub struct PushGateway {
    provider: Arc<dyn PushProvider>,
    store: RegistrationStore,
    applications: PlatformApplications,
}

impl PushGateway {
    pub fn new(
        provider: Arc<dyn PushProvider>,
        store: RegistrationStore,
        applications: PlatformApplications,
    ) -> Self {
        Self {
            provider,
            store,
            applications,
        }
    }

    /// Registration store backing this gateway.
    pub fn store(&self) -> &RegistrationStore {
        &self.store
    }

    /// Create a provider endpoint for `token` and record it for `user_id`.
    ///
    /// The store is only touched once the provider has returned an endpoint.
    #[instrument(skip(self, token))]
    pub async fn register_endpoint(
        &self,
        platform: Platform,
        user_id: &str,
        token: &str,
    ) -> Result<Registration, GatewayError> {
        info!("Registering device endpoint");

        let endpoint_arn = self
            .provider
            .create_platform_endpoint(self.applications.arn_for(platform), token)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to create platform endpoint");
                e
            })?;

        let registration = Registration::new(platform, user_id, endpoint_arn);
        if self.store.store(registration.clone()).await {
            info!(endpoint_arn = %registration.endpoint_arn, "Device registered");
        }

        Ok(registration)
    }

    /// Publish a notification to every device registered for `user_id`.
    ///
    /// Deliveries run concurrently. Failures are logged and never reported
    /// back; a user with no registrations is a no-op.
    #[instrument(skip(self, title, body))]
    pub async fn publish(&self, user_id: &str, title: &str, body: &str) {
        let registrations = self.store.list(user_id).await;
        if registrations.is_empty() {
            debug!("No registrations for user, nothing to publish");
            return;
        }

        let deliveries = registrations
            .iter()
            .map(|registration| async move {
                match self.publish_to(registration, title, body).await {
                    Ok(message_id) => info!(
                        platform = %registration.platform,
                        endpoint_arn = %registration.endpoint_arn,
                        message_id = %message_id,
                        "Notification published"
                    ),
                    Err(e) => warn!(
                        platform = %registration.platform,
                        endpoint_arn = %registration.endpoint_arn,
                        error = %e,
                        "Failed to publish notification"
                    ),
                }
            });

        join_all(deliveries).await;
    }

    async fn publish_to(
        &self,
        registration: &Registration,
        title: &str,
        body: &str,
    ) -> Result<String, GatewayError> {
        let message = build_payload(registration.platform, self.applications.apns, title, body)?;
        debug!(endpoint_arn = %registration.endpoint_arn, payload = %message, "Sending payload");

        Ok(self
            .provider
            .publish(&registration.endpoint_arn, &message)
            .await?)
    }
}
