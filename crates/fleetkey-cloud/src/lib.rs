//! fleetkey Cloud Access
//!
//! This crate provides the provider abstraction and the access pipeline for
//! fleetkey: opening a game-server fleet's firewall to the operator's public IP
//! and saving per-instance remote access credentials to disk.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  fleetkey CLI                    │
//! │        (prompts → AccessRequest → report)        │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │                fleetkey-cloud                    │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │            Provider Abstraction           │   │
//! │  │  trait FleetService { ... }               │   │
//! │  │  trait PublicIpSource { ... }             │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌────────────┐  ┌────────┐   │
//! │  │   Resolver   │  │ Authorizer │  │ Writer │   │
//! │  └──────────────┘  └────────────┘  └────────┘   │
//! └───────┬─────────────────────────────────────────┘
//!         │
//! ┌───────▼───────┐
//! │   gamelift    │
//! │   provider    │
//! └───────────────┘
//! ```

pub mod credentials;
pub mod error;
pub mod permission;
pub mod pipeline;
pub mod provider;
pub mod target;

// Re-exports
pub use credentials::{CredentialOutcome, INFO_FILE, PRIVATE_KEY_FILE, SavedCredentials};
pub use error::{AccessError, Result};
pub use permission::{InboundPermission, IpProtocol, RDP_PORT, SSH_PORT, inbound_permissions};
pub use pipeline::{AccessPipeline, AccessReport, AccessRequest, FleetReport, InstanceReport};
pub use provider::{Credentials, FleetService, Instance, OperatingSystem, PublicIpSource};
pub use target::Target;
