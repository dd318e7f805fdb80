// src/config/app.rs
//! Run configuration: built-in defaults, then an optional TOML file, then env.
//!
//! File lookup:
//! 1) $ALERTS_CONFIG_PATH (must exist when set)
//! 2) config/alerts.toml (optional)
//!
//! Env overrides (empty values count as unset): FEED_URL, FEED_USER_AGENT,
//! FEED_CA_BUNDLE, FEED_TIMEOUT_SECS, ALERTS_OUTPUT_PATH, ALERTS_COLLECTION,
//! SERVICE_ACCOUNT_JSON, FIRESTORE_ACCESS_TOKEN.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ingest::config::FeedConfig;

pub const ENV_CONFIG_PATH: &str = "ALERTS_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/alerts.toml";
pub const DEFAULT_OUTPUT_PATH: &str = "alerts_output.json";
pub const DEFAULT_COLLECTION: &str = "disaster_alerts";

#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub feed: FeedConfig,
    pub output_path: PathBuf,
    pub collection: String,
    /// Service-account JSON for the remote store. Absent → no remote push.
    pub service_account_json: Option<String>,
    /// Pre-minted OAuth bearer token for the remote store.
    pub store_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            collection: DEFAULT_COLLECTION.to_string(),
            service_account_json: None,
            store_token: None,
        }
    }
}

// Secrets are reported only as present/absent.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("feed", &self.feed)
            .field("output_path", &self.output_path)
            .field("collection", &self.collection)
            .field("service_account_json", &self.service_account_json.is_some())
            .field("store_token", &self.store_token.is_some())
            .finish()
    }
}

impl AppConfig {
    /// Defaults → config file (if any) → process environment.
    pub fn load() -> Result<Self> {
        let mut cfg = match std::env::var(ENV_CONFIG_PATH) {
            Ok(p) if !p.trim().is_empty() => {
                let pb = PathBuf::from(p);
                if !pb.exists() {
                    return Err(anyhow!(
                        "{ENV_CONFIG_PATH} points to non-existent path {}",
                        pb.display()
                    ));
                }
                Self::load_from_file(&pb)?
            }
            _ => {
                let default_p = Path::new(DEFAULT_CONFIG_PATH);
                if default_p.exists() {
                    Self::load_from_file(default_p)?
                } else {
                    Self::default()
                }
            }
        };
        cfg.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(cfg)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Overlay values from `lookup` (normally the process env).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("FEED_URL") {
            self.feed.url = v;
        }
        if let Some(v) = get("FEED_USER_AGENT") {
            self.feed.user_agent = v;
        }
        if let Some(v) = get("FEED_CA_BUNDLE") {
            self.feed.ca_bundle_path = Some(PathBuf::from(v));
        }
        if let Some(v) = get("FEED_TIMEOUT_SECS") {
            self.feed.timeout_secs = v
                .trim()
                .parse()
                .with_context(|| format!("FEED_TIMEOUT_SECS is not a number: {v:?}"))?;
        }
        if let Some(v) = get("ALERTS_OUTPUT_PATH") {
            self.output_path = PathBuf::from(v);
        }
        if let Some(v) = get("ALERTS_COLLECTION") {
            self.collection = v;
        }
        if let Some(v) = get("SERVICE_ACCOUNT_JSON") {
            self.service_account_json = Some(v);
        }
        if let Some(v) = get("FIRESTORE_ACCESS_TOKEN") {
            self.store_token = Some(v);
        }
        Ok(())
    }
}
