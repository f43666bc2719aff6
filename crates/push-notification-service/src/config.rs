//! Configuration for the notification service.

use crate::gateway::{ApnsEnvironment, PlatformApplications};
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sns_client::{SnsClientConfig, StaticCredentials};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Service configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Amazon SNS configuration
    #[serde(default)]
    pub sns: SnsConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
pub struct SnsConfig {
    /// AWS region hosting the platform applications
    #[serde(default = "default_region")]
    pub region: String,

    /// Platform application ARN for Android (Firebase) devices
    #[serde(default)]
    pub android_application_arn: String,

    /// Platform application ARN for iOS (APNs) devices
    #[serde(default)]
    pub ios_application_arn: String,

    /// APNs gateway the iOS application targets
    #[serde(default)]
    pub apns_environment: ApnsEnvironment,

    /// Access key of an IAM user with SNS rights
    pub access_key_id: Option<String>,

    /// Secret key matching `access_key_id`
    pub secret_access_key: Option<SecretString>,

    /// Endpoint override (e.g. LocalStack)
    pub endpoint_url: Option<String>,

    /// Per-operation timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum attempts per SNS operation
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON formatted logs
    #[serde(default)]
    pub json: bool,
}

// Default implementations
impl Default for SnsConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            android_application_arn: String::new(),
            ios_application_arn: String::new(),
            apns_environment: ApnsEnvironment::default(),
            access_key_id: None,
            secret_access_key: None,
            endpoint_url: None,
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value functions
fn default_region() -> String {
    "ap-southeast-2".into()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_attempts() -> u32 {
    3
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_environment(config::Environment::default())
    }

    /// Build configuration from an environment source, using `__` to
    /// separate nested keys (e.g. `SNS__REGION`).
    pub fn from_environment(environment: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(environment.separator("__").try_parsing(false))
            .build()
            .context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.server.socket_addr()?;
        Ok(config)
    }
}

impl ServerConfig {
    /// Address to bind; `listen_addr` must be a literal IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .listen_addr
            .parse()
            .with_context(|| format!("Invalid listen address {:?}", self.listen_addr))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl SnsConfig {
    /// Settings for the SNS client.
    ///
    /// Static credentials are only used when both keys are present.
    pub fn client_config(&self) -> SnsClientConfig {
        let credentials = match (&self.access_key_id, &self.secret_access_key) {
            (Some(access_key_id), Some(secret)) => Some(StaticCredentials {
                access_key_id: access_key_id.clone(),
                secret_access_key: SecretString::new(secret.expose_secret().clone()),
            }),
            _ => None,
        };

        SnsClientConfig {
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
            credentials,
            timeout: Duration::from_secs(self.timeout_secs),
            max_attempts: self.max_attempts,
        }
    }

    /// Platform applications endpoints are created under.
    pub fn applications(&self) -> PlatformApplications {
        PlatformApplications {
            android_arn: self.android_application_arn.clone(),
            ios_arn: self.ios_application_arn.clone(),
            apns: self.apns_environment,
        }
    }

    /// Names of platform application ARNs that are not configured.
    pub fn missing_applications(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.android_application_arn.trim().is_empty() {
            missing.push("android_application_arn");
        }
        if self.ios_application_arn.trim().is_empty() {
            missing.push("ios_application_arn");
        }
        missing
    }
}
