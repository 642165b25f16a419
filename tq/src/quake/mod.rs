//! USGS earthquake daily summary client
//!
//! Fetches the all-day GeoJSON feed and reduces it to per-quake
//! place/magnitude lines.

mod client;
mod config;
mod error;
mod types;

pub use client::{QuakeClient, summarize};
pub use config::QuakeConfig;
pub use error::QuakeError;
pub use types::{Feature, FeatureCollection, Properties};
