//! SNS client configuration types.

use secrecy::SecretString;
use std::time::Duration;

/// Static AWS credentials for an IAM user with SNS access.
#[derive(Debug)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: SecretString,
}

/// Settings used to construct an [`crate::SnsClient`].
#[derive(Debug)]
pub struct SnsClientConfig {
    /// AWS region hosting the platform applications (e.g. "ap-southeast-2")
    pub region: String,

    /// Endpoint override, e.g. a LocalStack URL
    pub endpoint_url: Option<String>,

    /// Static credentials; the default AWS credential chain is used when absent
    pub credentials: Option<StaticCredentials>,

    /// Per-operation timeout, including retries
    pub timeout: Duration,

    /// Maximum attempts per operation (1 disables retries)
    pub max_attempts: u32,
}

impl Default for SnsClientConfig {
    fn default() -> Self {
        Self {
            region: "ap-southeast-2".into(),
            endpoint_url: None,
            credentials: None,
            timeout: Duration::from_secs(30),
            max_attempts: 3,
        }
    }
}
