//! Inbound permission rules for remote access

use crate::provider::{Instance, OperatingSystem};
use std::fmt;
use std::net::Ipv4Addr;

/// SSH, opened for Linux instances
pub const SSH_PORT: u16 = 22;

/// RDP, opened for Windows instances
pub const RDP_PORT: u16 = 3389;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpProtocol {
    Tcp,
}

impl IpProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            IpProtocol::Tcp => "TCP",
        }
    }
}

/// Firewall allow-rule for a port range, protocol and source CIDR
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundPermission {
    pub from_port: u16,
    pub to_port: u16,
    pub ip_range: String,
    pub protocol: IpProtocol,
}

impl InboundPermission {
    /// Single-port TCP rule for exactly one source address
    pub fn tcp_from_host(port: u16, source: Ipv4Addr) -> Self {
        Self {
            from_port: port,
            to_port: port,
            ip_range: format!("{}/32", source),
            protocol: IpProtocol::Tcp,
        }
    }

    /// Remote login rule for the given OS family
    pub fn remote_access(os: OperatingSystem, source: Ipv4Addr) -> Self {
        let port = match os {
            OperatingSystem::Linux => SSH_PORT,
            OperatingSystem::Windows => RDP_PORT,
        };
        Self::tcp_from_host(port, source)
    }
}

impl fmt::Display for InboundPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}/{} from {}",
            self.from_port,
            self.to_port,
            self.protocol.as_str(),
            self.ip_range
        )
    }
}

/// Build the rule set for one fleet
///
/// One rule per OS family seen among `instances`, in first-seen order.
/// An empty slice yields an empty rule set.
pub fn inbound_permissions(instances: &[Instance], source: Ipv4Addr) -> Vec<InboundPermission> {
    let mut seen: Vec<OperatingSystem> = Vec::with_capacity(2);

    for instance in instances {
        let os = instance.os();
        if !seen.contains(&os) {
            seen.push(os);
        }
    }

    seen.into_iter()
        .map(|os| InboundPermission::remote_access(os, source))
        .collect()
}
