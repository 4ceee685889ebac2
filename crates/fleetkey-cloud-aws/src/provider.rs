//! GameLift provider implementation

use crate::convert::{credentials_from_sdk, instance_from_sdk, ip_permission_to_sdk};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_gamelift::Client;
use aws_sdk_gamelift::error::DisplayErrorContext;
use fleetkey_cloud::{AccessError, Credentials, FleetService, InboundPermission, Instance, Result};

/// GameLift-backed fleet service
#[derive(Clone)]
pub struct GameLiftService {
    client: Client,
    region: Option<String>,
}

impl GameLiftService {
    /// Create a client from the default AWS configuration chain
    pub async fn from_env() -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        let region = config.region().map(|r| r.to_string());

        Self {
            client: Client::new(&config),
            region,
        }
    }
}

fn sdk_error<E>(operation: &str, err: E) -> AccessError
where
    E: std::error::Error,
{
    AccessError::api(operation, DisplayErrorContext(err))
}

#[async_trait]
impl FleetService for GameLiftService {
    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    async fn list_fleets(&self, build_id: &str) -> Result<Vec<String>> {
        let mut fleet_ids = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            tracing::debug!("ListFleets build_id={} next_token={:?}", build_id, next_token);
            let output = self
                .client
                .list_fleets()
                .build_id(build_id)
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| sdk_error("ListFleets", e))?;

            fleet_ids.extend(output.fleet_ids().iter().cloned());

            match output.next_token() {
                Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
                _ => break,
            }
        }

        Ok(fleet_ids)
    }

    async fn describe_instances(&self, fleet_id: &str) -> Result<Vec<Instance>> {
        let mut instances = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            tracing::debug!(
                "DescribeInstances fleet_id={} next_token={:?}",
                fleet_id,
                next_token
            );
            let output = self
                .client
                .describe_instances()
                .fleet_id(fleet_id)
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| sdk_error("DescribeInstances", e))?;

            for instance in output.instances() {
                match instance_from_sdk(fleet_id, instance) {
                    Some(instance) => instances.push(instance),
                    None => tracing::warn!("Ignoring instance without id in fleet {}", fleet_id),
                }
            }

            match output.next_token() {
                Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
                _ => break,
            }
        }

        Ok(instances)
    }

    async fn update_inbound_permissions(
        &self,
        fleet_id: &str,
        permissions: &[InboundPermission],
    ) -> Result<()> {
        let authorizations = permissions
            .iter()
            .map(ip_permission_to_sdk)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            "UpdateFleetPortSettings fleet_id={} rules={}",
            fleet_id,
            authorizations.len()
        );
        self.client
            .update_fleet_port_settings()
            .fleet_id(fleet_id)
            .set_inbound_permission_authorizations(Some(authorizations))
            .send()
            .await
            .map_err(|e| sdk_error("UpdateFleetPortSettings", e))?;

        Ok(())
    }

    async fn get_instance_access(
        &self,
        fleet_id: &str,
        instance_id: &str,
    ) -> Result<Option<Credentials>> {
        tracing::debug!(
            "GetInstanceAccess fleet_id={} instance_id={}",
            fleet_id,
            instance_id
        );
        let output = self
            .client
            .get_instance_access()
            .fleet_id(fleet_id)
            .instance_id(instance_id)
            .send()
            .await
            .map_err(|e| sdk_error("GetInstanceAccess", e))?;

        Ok(credentials_from_sdk(output.instance_access()))
    }
}
