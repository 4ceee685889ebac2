use async_trait::async_trait;
use fleetkey_cloud::{AccessError, PublicIpSource, Result};

/// Plain-text "what is my IP" endpoint (ipify and compatibles)
pub struct HttpIpLookup {
    client: reqwest::Client,
    url: String,
}

impl HttpIpLookup {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl PublicIpSource for HttpIpLookup {
    async fn lookup(&self) -> Result<String> {
        tracing::debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("User-Agent", "fleetkey")
            .send()
            .await
            .map_err(|e| AccessError::api("public IP lookup", e))?;

        if !response.status().is_success() {
            return Err(AccessError::api(
                "public IP lookup",
                format!("{} returned {}", self.url, response.status()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| AccessError::api("public IP lookup", e))
    }
}
