//! SNS client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnsError {
    #[error("Create platform endpoint failed: {0}")]
    CreateEndpoint(String),

    #[error("Publish failed: {0}")]
    Publish(String),

    #[error("Provider returned no endpoint ARN")]
    MissingEndpointArn,

    #[error("Configuration error: {0}")]
    Config(String),
}
