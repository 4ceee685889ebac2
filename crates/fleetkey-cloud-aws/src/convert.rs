//! Conversions between GameLift SDK types and fleetkey types

use aws_sdk_gamelift::types;
use fleetkey_cloud::{Credentials, InboundPermission, Instance, IpProtocol, Result};

/// Convert a described instance
///
/// Returns `None` for records without an instance id. A missing fleet id
/// falls back to the fleet that was described.
pub fn instance_from_sdk(fleet_id: &str, instance: &types::Instance) -> Option<Instance> {
    let instance_id = instance.instance_id()?;
    let operating_system = instance
        .operating_system()
        .map(|os| os.as_str())
        .unwrap_or_default();

    Some(Instance::new(
        instance.fleet_id().unwrap_or(fleet_id),
        instance_id,
        operating_system,
    ))
}

/// Convert an inbound permission into the SDK request shape
pub fn ip_permission_to_sdk(permission: &InboundPermission) -> Result<types::IpPermission> {
    let protocol = match permission.protocol {
        IpProtocol::Tcp => types::IpProtocol::Tcp,
    };

    Ok(types::IpPermission::builder()
        .from_port(i32::from(permission.from_port))
        .to_port(i32::from(permission.to_port))
        .ip_range(&permission.ip_range)
        .protocol(protocol)
        .build())
}

/// Extract credentials from an instance access payload
///
/// `None` when the payload, the credentials or either field is absent.
pub fn credentials_from_sdk(access: Option<&types::InstanceAccess>) -> Option<Credentials> {
    let credentials = access?.credentials()?;
    Some(Credentials::new(
        credentials.user_name()?,
        credentials.secret()?,
    ))
}
