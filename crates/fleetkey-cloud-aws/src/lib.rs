//! Amazon GameLift provider for fleetkey
//!
//! This crate implements the FleetService trait on top of the GameLift API.
//!
//! # Requirements
//!
//! - AWS credentials and a region resolvable through the default provider
//!   chain (`AWS_PROFILE`, `AWS_REGION`, `~/.aws/config`, ...)
//! - `gamelift:ListFleets`, `gamelift:DescribeInstances`,
//!   `gamelift:UpdateFleetPortSettings` and `gamelift:GetInstanceAccess`
//!
//! # Example
//!
//! ```ignore
//! use fleetkey_cloud::FleetService;
//! use fleetkey_cloud_aws::GameLiftService;
//!
//! let service = GameLiftService::from_env().await;
//! let fleets = service.list_fleets("build-1111aaaa").await?;
//! ```

pub mod convert;
pub mod provider;

pub use provider::GameLiftService;
