//! Earthquake feed configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Earthquake feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuakeConfig {
    /// GeoJSON feed URL
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    /// HTTP timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Max retries for transient feed errors
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_feed_url() -> String {
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson".to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_max_retries() -> u32 {
    3
}

impl Default for QuakeConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
        }
    }
}

impl QuakeConfig {
    /// Get the HTTP timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
