//! Access pipeline
//!
//! resolve fleets → look up public IP → (describe + authorize) per fleet →
//! credentials per instance. Every call is awaited in order; a failure on one
//! fleet or instance is logged and recorded, then the run moves on.

use crate::credentials::{self, CredentialOutcome};
use crate::error::{AccessError, Result};
use crate::permission::{InboundPermission, inbound_permissions};
use crate::provider::{FleetService, Instance, PublicIpSource};
use crate::target::Target;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

/// Validated input for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRequest {
    pub output_dir: PathBuf,
    pub target: Target,
}

/// Result of the provisioning stage for one fleet
#[derive(Debug, Clone)]
pub struct FleetReport {
    pub fleet_id: String,
    pub instances: Vec<Instance>,
    /// `None` when the fleet was skipped before the update call
    pub permissions: Option<Vec<InboundPermission>>,
    pub port_update_error: Option<String>,
}

impl FleetReport {
    pub fn port_update_failed(&self) -> bool {
        self.port_update_error.is_some()
    }
}

/// Result of the credential stage for one instance
#[derive(Debug, Clone)]
pub struct InstanceReport {
    pub instance: Instance,
    pub outcome: CredentialOutcome,
}

/// Everything one run did
#[derive(Debug, Clone)]
pub struct AccessReport {
    pub public_ip: Ipv4Addr,
    pub fleets: Vec<FleetReport>,
    pub instances: Vec<InstanceReport>,
}

impl AccessReport {
    pub fn saved_count(&self) -> usize {
        self.instances
            .iter()
            .filter(|r| r.outcome.is_saved())
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.instances.len() - self.saved_count()
    }

    pub fn failed_port_updates(&self) -> usize {
        self.fleets.iter().filter(|f| f.port_update_failed()).count()
    }
}

/// Runs the access stages against injected collaborators
pub struct AccessPipeline<'a> {
    service: &'a dyn FleetService,
    ip_source: &'a dyn PublicIpSource,
}

impl<'a> AccessPipeline<'a> {
    pub fn new(service: &'a dyn FleetService, ip_source: &'a dyn PublicIpSource) -> Self {
        Self { service, ip_source }
    }

    /// Run all stages for a request
    ///
    /// Errors are the fatal conditions; files written before one stay on disk.
    pub async fn run(&self, request: &AccessRequest) -> Result<AccessReport> {
        let fleet_ids = self.resolve_fleets(&request.target).await?;
        let public_ip = self.public_ip().await?;
        tracing::info!("Public IP: {}", public_ip);

        let mut fleets = Vec::with_capacity(fleet_ids.len());
        for fleet_id in &fleet_ids {
            fleets.push(self.provision_fleet(fleet_id, public_ip).await);
        }

        let mut instances = Vec::new();
        for fleet in &fleets {
            for instance in &fleet.instances {
                let outcome = self.retrieve_access(instance, &request.output_dir).await;
                instances.push(InstanceReport {
                    instance: instance.clone(),
                    outcome,
                });
            }
        }

        Ok(AccessReport {
            public_ip,
            fleets,
            instances,
        })
    }

    /// Fleet ids to process for a target
    pub async fn resolve_fleets(&self, target: &Target) -> Result<Vec<String>> {
        match target {
            Target::Fleet(id) => Ok(vec![id.clone()]),
            Target::Build(build_id) => {
                tracing::info!("Listing fleets for build {}", build_id);
                let fleet_ids = self.service.list_fleets(build_id).await?;
                if fleet_ids.is_empty() {
                    return Err(AccessError::NoFleetsForBuild(build_id.clone()));
                }
                tracing::info!("Build {} has {} fleet(s)", build_id, fleet_ids.len());
                Ok(fleet_ids)
            }
        }
    }

    /// Caller's public IPv4 address
    pub async fn public_ip(&self) -> Result<Ipv4Addr> {
        let raw = self.ip_source.lookup().await?;
        parse_public_ip(&raw)
    }

    /// Describe a fleet's instances, or an empty list when it has none
    pub async fn enumerate_instances(&self, fleet_id: &str) -> Result<Vec<Instance>> {
        let instances = self.service.describe_instances(fleet_id).await?;
        if instances.is_empty() {
            tracing::warn!("Fleet {} Has No Active Instances", fleet_id);
        }
        Ok(instances)
    }

    /// Open SSH/RDP on one fleet for the caller
    ///
    /// Returns the submitted rule set, or the service's error message.
    pub async fn authorize_ports(
        &self,
        fleet_id: &str,
        instances: &[Instance],
        public_ip: Ipv4Addr,
    ) -> (Vec<InboundPermission>, Option<String>) {
        let permissions = inbound_permissions(instances, public_ip);
        for permission in &permissions {
            tracing::debug!("Fleet {}: authorizing {}", fleet_id, permission);
        }

        match self
            .service
            .update_inbound_permissions(fleet_id, &permissions)
            .await
        {
            Ok(()) => {
                tracing::info!(
                    "Updated port settings for fleet {} ({} rule(s))",
                    fleet_id,
                    permissions.len()
                );
                (permissions, None)
            }
            Err(e) => {
                tracing::warn!("Failed to update port settings for fleet {}: {}", fleet_id, e);
                (permissions, Some(e.to_string()))
            }
        }
    }

    /// Enumerate and authorize one fleet
    pub async fn provision_fleet(&self, fleet_id: &str, public_ip: Ipv4Addr) -> FleetReport {
        tracing::info!("Describing instances of fleet {}", fleet_id);
        let instances = match self.enumerate_instances(fleet_id).await {
            Ok(instances) => instances,
            Err(e) => {
                tracing::warn!("Skipping fleet {}: {}", fleet_id, e);
                return FleetReport {
                    fleet_id: fleet_id.to_string(),
                    instances: Vec::new(),
                    permissions: None,
                    port_update_error: None,
                };
            }
        };

        // a failed update still lets credential retrieval run
        let (permissions, port_update_error) =
            self.authorize_ports(fleet_id, &instances, public_ip).await;

        FleetReport {
            fleet_id: fleet_id.to_string(),
            instances,
            permissions: Some(permissions),
            port_update_error,
        }
    }

    /// Fetch and save one instance's credentials
    pub async fn retrieve_access(
        &self,
        instance: &Instance,
        output_dir: &Path,
    ) -> CredentialOutcome {
        tracing::info!(
            "Attempting to Get Instance Remote Access for Instance {}",
            instance.instance_id
        );

        let credentials = match self
            .service
            .get_instance_access(&instance.fleet_id, &instance.instance_id)
            .await
        {
            Ok(Some(credentials)) => credentials,
            Ok(None) => {
                tracing::warn!(
                    "Failed to Get Instance Access for Instance {}",
                    instance.instance_id
                );
                return CredentialOutcome::Missing;
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to Get Instance Access for Instance {}: {}",
                    instance.instance_id,
                    e
                );
                return CredentialOutcome::Failed(e.to_string());
            }
        };

        match credentials::save_credentials(output_dir, instance, &credentials).await {
            Ok(saved) => CredentialOutcome::Saved(saved),
            Err(e) => {
                tracing::warn!(
                    "Failed to save credentials for Instance {}: {}",
                    instance.instance_id,
                    e
                );
                CredentialOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Parse the body of a public-IP lookup
pub fn parse_public_ip(raw: &str) -> Result<Ipv4Addr> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(AccessError::PublicIpUnavailable);
    }
    text.parse()
        .map_err(|_| AccessError::InvalidPublicIp(text.to_string()))
}
