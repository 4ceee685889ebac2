//! Environment-driven settings

/// Public IP endpoint used when `FLEETKEY_IP_LOOKUP_URL` is unset
pub const DEFAULT_IP_LOOKUP_URL: &str = "https://api.ipify.org";

pub const IP_LOOKUP_URL_ENV: &str = "FLEETKEY_IP_LOOKUP_URL";

/// Ambient settings, read once at startup
///
/// AWS profile and region come from the SDK's own chain, not from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub ip_lookup_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ip_lookup_url: DEFAULT_IP_LOOKUP_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Ok(url) = std::env::var(IP_LOOKUP_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                settings.ip_lookup_url = url.to_string();
            }
        }

        settings
    }
}
