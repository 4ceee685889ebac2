use async_trait::async_trait;
use fleetkey_cloud::{
    AccessError, Credentials, FleetService, InboundPermission, Instance, PublicIpSource, Result,
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Call made against the in-memory service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListFleets(String),
    DescribeInstances(String),
    UpdatePorts(String, Vec<InboundPermission>),
    GetAccess(String, String),
}

/// In-memory fleet service that records every call
#[derive(Default)]
pub struct FakeFleetService {
    pub builds: HashMap<String, Vec<String>>,
    pub instances: HashMap<String, Vec<Instance>>,
    pub credentials: HashMap<String, Credentials>,
    pub failing_port_updates: HashSet<String>,
    pub failing_describes: HashSet<String>,
    pub failing_lists: HashSet<String>,
    pub failing_access: HashSet<String>,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeFleetService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_build(mut self, build_id: &str, fleet_ids: &[&str]) -> Self {
        self.builds.insert(
            build_id.to_string(),
            fleet_ids.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn with_instance(mut self, fleet_id: &str, instance_id: &str, os: &str) -> Self {
        self.instances
            .entry(fleet_id.to_string())
            .or_default()
            .push(Instance::new(fleet_id, instance_id, os));
        self
    }

    pub fn with_credentials(mut self, instance_id: &str, username: &str, secret: &str) -> Self {
        self.credentials
            .insert(instance_id.to_string(), Credentials::new(username, secret));
        self
    }

    pub fn failing_port_update(mut self, fleet_id: &str) -> Self {
        self.failing_port_updates.insert(fleet_id.to_string());
        self
    }

    pub fn failing_describe(mut self, fleet_id: &str) -> Self {
        self.failing_describes.insert(fleet_id.to_string());
        self
    }

    pub fn failing_list(mut self, build_id: &str) -> Self {
        self.failing_lists.insert(build_id.to_string());
        self
    }

    pub fn failing_instance_access(mut self, instance_id: &str) -> Self {
        self.failing_access.insert(instance_id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn port_updates(&self) -> Vec<(String, Vec<InboundPermission>)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::UpdatePorts(fleet, rules) => Some((fleet, rules)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl FleetService for FakeFleetService {
    fn region(&self) -> Option<&str> {
        Some("us-west-2")
    }

    async fn list_fleets(&self, build_id: &str) -> Result<Vec<String>> {
        self.record(Call::ListFleets(build_id.to_string()));
        if self.failing_lists.contains(build_id) {
            return Err(AccessError::api("ListFleets", "AccessDeniedException"));
        }
        Ok(self.builds.get(build_id).cloned().unwrap_or_default())
    }

    async fn describe_instances(&self, fleet_id: &str) -> Result<Vec<Instance>> {
        self.record(Call::DescribeInstances(fleet_id.to_string()));
        if self.failing_describes.contains(fleet_id) {
            return Err(AccessError::api("DescribeInstances", "NotFoundException"));
        }
        Ok(self.instances.get(fleet_id).cloned().unwrap_or_default())
    }

    async fn update_inbound_permissions(
        &self,
        fleet_id: &str,
        permissions: &[InboundPermission],
    ) -> Result<()> {
        self.record(Call::UpdatePorts(fleet_id.to_string(), permissions.to_vec()));
        if self.failing_port_updates.contains(fleet_id) {
            return Err(AccessError::api(
                "UpdateFleetPortSettings",
                "InvalidRequestException",
            ));
        }
        Ok(())
    }

    async fn get_instance_access(
        &self,
        fleet_id: &str,
        instance_id: &str,
    ) -> Result<Option<Credentials>> {
        self.record(Call::GetAccess(fleet_id.to_string(), instance_id.to_string()));
        if self.failing_access.contains(instance_id) {
            return Err(AccessError::api("GetInstanceAccess", "InternalServiceException"));
        }
        Ok(self.credentials.get(instance_id).cloned())
    }
}

/// Public IP source returning a fixed body
pub struct FixedIp(pub &'static str);

#[async_trait]
impl PublicIpSource for FixedIp {
    async fn lookup(&self) -> Result<String> {
        Ok(self.0.to_string())
    }
}
