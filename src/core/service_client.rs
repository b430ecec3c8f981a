// src/core/service_client.rs
//! HTTP client for the remote preferences/config endpoint

use anyhow::{Context, Result};
use tracing::{error, info, trace};

use crate::core::config_manager::EndpointConfig;
use crate::error::TransportError;
use crate::types::{NormalizedConfig, SubmitResponse};

pub const CONFIG_ENDPOINT: &str = "/api/config";

pub struct ConfigClient {
    client: reqwest::Client,
    base_url: String,
}

impl ConfigClient {
    pub fn new(endpoint: &EndpointConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(endpoint.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: endpoint.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the config. The username goes in the query string as well as the body.
    pub async fn submit(&self, config: &NormalizedConfig) -> Result<SubmitResponse, TransportError> {
        let url = format!("{}{}", self.base_url, CONFIG_ENDPOINT);

        info!("Posting config for {} to {}", config.username, url);

        let response = self
            .client
            .post(&url)
            .query(&[("username", config.username.as_str())])
            .json(config)
            .send()
            .await?;

        let status = response.status();
        trace!("Response status: {}", status);

        let text = response.text().await?;

        if status.is_success() {
            info!("Config accepted for {}", config.username);
            Ok(SubmitResponse::from_text(status.as_u16(), text))
        } else {
            error!("Config endpoint error {}: {}", status, text);
            Err(TransportError::Status { status, body: text })
        }
    }
}
