//! In-memory registration store.

use super::Registration;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Registrations indexed by user id, kept for the lifetime of the process.
///
/// Cloning yields another handle to the same underlying map. The whole map
/// sits behind one lock so the duplicate check and append in [`store`] are a
/// single atomic step.
///
/// [`store`]: RegistrationStore::store
#[derive(Debug, Clone, Default)]
pub struct RegistrationStore {
    registrations: Arc<RwLock<HashMap<String, Vec<Registration>>>>,
}

impl RegistrationStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a registration unless the user already has its endpoint.
    ///
    /// Returns `true` if the registration was added.
    pub async fn store(&self, registration: Registration) -> bool {
        let mut registrations = self.registrations.write().await;
        let user_registrations = registrations
            .entry(registration.user_id.clone())
            .or_default();

        if user_registrations
            .iter()
            .any(|r| r.endpoint_arn == registration.endpoint_arn)
        {
            debug!(
                user_id = %registration.user_id,
                endpoint_arn = %registration.endpoint_arn,
                "Endpoint already registered for user"
            );
            return false;
        }

        user_registrations.push(registration);
        true
    }

    /// Snapshot of a user's registrations; empty for unknown users.
    pub async fn list(&self, user_id: &str) -> Vec<Registration> {
        self.registrations
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of users with a registration and total registrations,
    /// read under one lock so the two agree.
    pub async fn counts(&self) -> (usize, usize) {
        let registrations = self.registrations.read().await;
        let total = registrations.values().map(Vec::len).sum();
        (registrations.len(), total)
    }
}
