// src/ingest/config.rs
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_FEED_URL: &str = "https://sachet.ndma.gov.in/cap_public_website/rss/rss_india.xml";
pub const DEFAULT_USER_AGENT: &str = concat!("disaster-alert-feed/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// HTTP side of the feed fetch.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeedConfig {
    pub url: String,
    pub user_agent: String,
    /// Extra PEM root certificates, on top of the built-in roots.
    pub ca_bundle_path: Option<PathBuf>,
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            ca_bundle_path: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
