//! Access error types

use thiserror::Error;

/// Errors that stop an access run
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Please Enter a Valid Fleet ID or Build ID, Accepted Formats are fleet-### or build-###: {0}")]
    InvalidIdentifier(String),

    #[error("No AWS region is configured. Set AWS_REGION or a profile region and start over")]
    RegionNotConfigured,

    #[error("Invalid Region Confirmation")]
    InvalidRegionConfirmation,

    #[error("Please Configure the AWS Region and Start Over")]
    RegionRejected,

    #[error("No Fleets Associated With Build Id {0}")]
    NoFleetsForBuild(String),

    #[error("Failed to Get Public IP")]
    PublicIpUnavailable,

    #[error("Public IP lookup returned an invalid IPv4 address: {0:?}")]
    InvalidPublicIp(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AccessError {
    /// Wrap a provider error with the name of the operation that produced it
    pub fn api(operation: &str, err: impl std::fmt::Display) -> Self {
        AccessError::ApiError(format!("{}: {}", operation, err))
    }
}

pub type Result<T> = std::result::Result<T, AccessError>;
