//! Fleet service trait definition

use crate::error::Result;
use crate::permission::InboundPermission;
use async_trait::async_trait;
use std::fmt;

/// Game-server fleet management abstraction
///
/// The GameLift provider implements this trait; tests substitute an in-memory
/// implementation. Every call is awaited one at a time by the pipeline.
#[async_trait]
pub trait FleetService: Send + Sync {
    /// Region the service client talks to, if one is configured
    fn region(&self) -> Option<&str>;

    /// List the ids of fleets created from a build, in service order
    async fn list_fleets(&self, build_id: &str) -> Result<Vec<String>>;

    /// Describe every instance of a fleet
    async fn describe_instances(&self, fleet_id: &str) -> Result<Vec<Instance>>;

    /// Submit an inbound permission set for a fleet
    async fn update_inbound_permissions(
        &self,
        fleet_id: &str,
        permissions: &[InboundPermission],
    ) -> Result<()>;

    /// Request temporary remote access credentials for one instance
    ///
    /// `Ok(None)` means the service answered without a credentials payload.
    async fn get_instance_access(
        &self,
        fleet_id: &str,
        instance_id: &str,
    ) -> Result<Option<Credentials>>;
}

/// Source of the caller's public IP address
#[async_trait]
pub trait PublicIpSource: Send + Sync {
    /// Returns the raw response body of the lookup
    async fn lookup(&self) -> Result<String>;
}

/// Operating system family of an instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatingSystem {
    Linux,
    Windows,
}

impl OperatingSystem {
    /// Classify a raw descriptor such as `AMAZON_LINUX_2` or `WINDOWS_2012`
    ///
    /// The match is case-sensitive; anything without `LINUX` is Windows.
    pub fn classify(descriptor: &str) -> Self {
        if descriptor.contains("LINUX") {
            OperatingSystem::Linux
        } else {
            OperatingSystem::Windows
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingSystem::Linux => "LINUX",
            OperatingSystem::Windows => "WINDOWS",
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A running instance of a fleet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub instance_id: String,
    pub fleet_id: String,
    /// OS descriptor exactly as reported by the service
    pub operating_system: String,
}

impl Instance {
    pub fn new(
        fleet_id: impl Into<String>,
        instance_id: impl Into<String>,
        operating_system: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            fleet_id: fleet_id.into(),
            operating_system: operating_system.into(),
        }
    }

    pub fn os(&self) -> OperatingSystem {
        OperatingSystem::classify(&self.operating_system)
    }
}

/// Temporary login issued for one instance
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    /// RDP password on Windows, PEM private key on Linux
    pub secret: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}
