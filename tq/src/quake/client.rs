//! Earthquake feed client
//!
//! Thin reqwest wrapper with bounded retry for transient feed errors.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use super::config::QuakeConfig;
use super::error::QuakeError;
use super::types::FeatureCollection;

/// Initial backoff delay for retries
const INITIAL_BACKOFF_MS: u64 = 1000;

/// USGS earthquake feed client
pub struct QuakeClient {
    http: Client,
    config: QuakeConfig,
}

impl QuakeClient {
    /// Create a new client from configuration
    pub fn from_config(config: QuakeConfig) -> Result<Self, QuakeError> {
        debug!(?config, "QuakeClient::from_config: called");
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(QuakeError::Network)?;

        Ok(Self { http, config })
    }

    /// Fetch the all-day earthquake feature collection
    ///
    /// Transient failures (timeouts, 429, 5xx) are retried with doubling
    /// backoff up to the configured retry limit before the error surfaces.
    pub async fn fetch_daily(&self) -> Result<FeatureCollection, QuakeError> {
        debug!(feed_url = %self.config.feed_url, "QuakeClient::fetch_daily: called");
        let mut backoff_ms = INITIAL_BACKOFF_MS;
        let mut attempt = 0;

        loop {
            match self.fetch_once().await {
                Ok(collection) => return Ok(collection),
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    warn!(%err, attempt, backoff_ms, "fetch_daily: transient error, retrying");
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms *= 2;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn fetch_once(&self) -> Result<FeatureCollection, QuakeError> {
        let response = self.http.get(&self.config.feed_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(QuakeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the feed and reduce it to place/magnitude summary lines
    pub async fn daily_summary(&self) -> Result<Vec<String>, QuakeError> {
        let collection = self.fetch_daily().await?;
        Ok(summarize(&collection))
    }
}

/// Render one `"<place> - Mag <mag>"` line per feature that has a magnitude
///
/// Features without a magnitude are skipped; a missing place renders empty.
pub fn summarize(collection: &FeatureCollection) -> Vec<String> {
    debug!(features = collection.features.len(), "summarize: called");
    collection
        .features
        .iter()
        .filter_map(|feature| {
            let mag = feature.properties.mag?;
            let place = feature.properties.place.as_deref().unwrap_or("");
            Some(format!("{} - Mag {}", place, mag))
        })
        .collect()
}
