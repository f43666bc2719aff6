//! Platform-specific message envelopes for SNS JSON publishing.
//!
//! SNS expects an object keyed by delivery protocol whose values are
//! themselves JSON documents encoded as strings:
//!
//! ```text
//! {"GCM":"{\"notification\":{\"title\":\"Title\",\"body\":\"Body\"}}"}
//! {"APNS_SANDBOX":"{\"aps\":{\"alert\":{\"title\":\"Title\",\"body\":\"Body\"}}}"}
//! ```

use crate::registry::Platform;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Protocol key for Android (Firebase) deliveries.
pub const GCM_KEY: &str = "GCM";

/// Apple push gateway the iOS platform application is bound to.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApnsEnvironment {
    #[default]
    Sandbox,
    Production,
}

impl ApnsEnvironment {
    /// Protocol key for iOS deliveries.
    pub fn message_key(&self) -> &'static str {
        match self {
            ApnsEnvironment::Sandbox => "APNS_SANDBOX",
            ApnsEnvironment::Production => "APNS",
        }
    }
}

#[derive(Serialize)]
struct Alert<'a> {
    title: &'a str,
    body: &'a str,
}

#[derive(Serialize)]
struct AndroidMessage<'a> {
    notification: Alert<'a>,
}

#[derive(Serialize)]
struct Aps<'a> {
    alert: Alert<'a>,
}

#[derive(Serialize)]
struct IosMessage<'a> {
    aps: Aps<'a>,
}

/// Build the serialized SNS message for one platform.
pub fn build_payload(
    platform: Platform,
    apns: ApnsEnvironment,
    title: &str,
    body: &str,
) -> Result<String, serde_json::Error> {
    let alert = Alert { title, body };

    let (key, inner) = match platform {
        Platform::Android => (
            GCM_KEY,
            serde_json::to_string(&AndroidMessage {
                notification: alert,
            })?,
        ),
        Platform::Ios => (
            apns.message_key(),
            serde_json::to_string(&IosMessage {
                aps: Aps { alert },
            })?,
        ),
    };

    let mut envelope = Map::new();
    envelope.insert(key.to_string(), Value::String(inner));
    serde_json::to_string(&envelope)
}
