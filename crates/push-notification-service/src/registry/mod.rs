//! Device registrations and the in-memory registration store.

mod memory;

pub use memory::RegistrationStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mobile platform a device token belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// Tag clients send in registration requests.
    pub fn wire_tag(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    /// Human-readable name used in response messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_tag())
    }
}

/// Error returned when a platform tag is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            other => Err(UnknownPlatform(other.to_string())),
        }
    }
}

/// A device registered with the push provider on behalf of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub platform: Platform,

    pub user_id: String,

    /// Provider-assigned endpoint ARN used to target this device
    pub endpoint_arn: String,

    /// When the endpoint was registered
    pub registered_at: DateTime<Utc>,
}

impl Registration {
    /// Create a registration for a freshly created provider endpoint.
    pub fn new(
        platform: Platform,
        user_id: impl Into<String>,
        endpoint_arn: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            user_id: user_id.into(),
            endpoint_arn: endpoint_arn.into(),
            registered_at: Utc::now(),
        }
    }
}
