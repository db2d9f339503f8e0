//! HTTP client for the BloodLink lookup service

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use urlencoding::encode;

use crate::config::PortalConfig;
use crate::error::LookupError;
use crate::ports::{Locality, LocalitySource, Region};

/// HTTP client for the lookup endpoints
#[derive(Clone)]
pub struct LookupClient {
    client: reqwest::Client,
    base_url: String,
}

impl LookupClient {
    /// Create a client from environment variables (see `PortalConfig`)
    pub fn from_env() -> Result<Self> {
        let config = PortalConfig::from_env();
        Self::from_config(&config)
    }

    pub fn from_config(config: &PortalConfig) -> Result<Self> {
        Self::with_timeout(&config.api_url, config.request_timeout)
    }

    /// Create a client with explicit configuration and no request timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /api/cities/{region_id}
    pub async fn fetch_cities(&self, region_id: &str) -> Result<Vec<Locality>, LookupError> {
        self.get_json(&format!("/api/cities/{}", encode(region_id)))
            .await
    }

    /// GET /api/states
    pub async fn fetch_states(&self) -> Result<Vec<Region>, LookupError> {
        self.get_json("/api/states").await
    }

    // --- Internal helpers ---

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LookupError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "lookup request");
        let response = self.client.get(&url).send().await?;

        handle_json_response(response).await
    }
}

async fn handle_json_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, LookupError> {
    let status = response.status();

    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(LookupError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| LookupError::Decode(e.to_string()))
}

#[async_trait]
impl LocalitySource for LookupClient {
    async fn localities(&self, region_id: &str) -> Result<Vec<Locality>, LookupError> {
        self.fetch_cities(region_id).await
    }

    async fn regions(&self) -> Result<Vec<Region>, LookupError> {
        self.fetch_states().await
    }
}
