//! Push Notification Service - device registration and notification fan-out.
//!
//! Devices register their APNs or Firebase push token for a user; the service
//! creates an Amazon SNS platform endpoint for the token and remembers it in
//! memory. Sending a notification to a user publishes a platform-specific
//! message to each of that user's endpoints.

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod registry;

pub use config::Config;
pub use error::{ApiError, GatewayError};
pub use gateway::{ApnsEnvironment, PlatformApplications, PushGateway};
pub use registry::{Platform, Registration, RegistrationStore};
