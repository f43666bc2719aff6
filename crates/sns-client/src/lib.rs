//! Amazon SNS mobile push client.
//!
//! Exposes the two provider operations the notification service needs:
//! creating a platform endpoint for a device token, and publishing a
//! multi-platform JSON message to an endpoint.

mod client;
mod error;
mod provider;
mod types;

pub use client::SnsClient;
pub use error::SnsError;
pub use provider::PushProvider;
pub use types::*;
