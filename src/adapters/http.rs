use crate::config::toml_config::ClientSettings;
use crate::domain::ports::NetworkClient;
use crate::utils::error::{Result, ServiceError};
use std::time::Duration;

/// Build a reqwest client from the configured timeout and user agent.
pub fn build_http_client(settings: &ClientSettings) -> Result<reqwest::Client> {
    tracing::debug!(
        timeout_seconds = settings.timeout_seconds(),
        user_agent = settings.user_agent(),
        "Building HTTP client"
    );

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.timeout_seconds()))
        .user_agent(settings.user_agent())
        .build()?;

    Ok(client)
}

impl NetworkClient for reqwest::Client {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Fetching {}", url);

        let response = self.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
