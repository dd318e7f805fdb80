// src/sink/mod.rs
//! Output side: the JSON array file and the optional remote document store.

pub mod firestore;
pub mod memory;

use anyhow::{Context, Result};
use metrics::counter;
use std::path::Path;

use crate::assemble::AlertRecord;
use crate::config::AppConfig;

#[async_trait::async_trait]
pub trait AlertStore: Send + Sync {
    /// Add one alert as a new document in `collection`.
    async fn add(&self, collection: &str, alert: &AlertRecord) -> Result<()>;
    fn name(&self) -> &'static str;
}

/// Pretty (2-space) JSON array; non-ASCII is kept literal. Empty → `[]`.
pub fn to_json_pretty(alerts: &[AlertRecord]) -> Result<String> {
    serde_json::to_string_pretty(alerts).context("serializing alerts")
}

pub fn write_json_file(path: &Path, alerts: &[AlertRecord]) -> Result<()> {
    let json = to_json_pretty(alerts)?;
    std::fs::write(path, json).with_context(|| format!("writing alerts to {}", path.display()))?;
    tracing::info!(path = %path.display(), count = alerts.len(), "alerts written");
    Ok(())
}

/// Build the remote store from config. Any problem disables the store for
/// the run; it never fails the run.
pub fn init_store(cfg: &AppConfig) -> Option<Box<dyn AlertStore>> {
    let Some(sa_json) = cfg.service_account_json.as_deref() else {
        tracing::warn!("SERVICE_ACCOUNT_JSON not set; remote store disabled");
        return None;
    };
    let Some(token) = cfg.store_token.as_deref() else {
        tracing::warn!("FIRESTORE_ACCESS_TOKEN not set; remote store disabled");
        return None;
    };
    match firestore::FirestoreStore::from_service_account(sa_json, token)
        .map(|s| s.with_timeout(cfg.feed.timeout_secs))
    {
        Ok(store) => {
            tracing::info!(project = store.project_id(), "firestore initialized");
            Some(Box::new(store))
        }
        Err(e) => {
            tracing::error!(error = ?e, "firestore init failed; remote store disabled");
            None
        }
    }
}

/// Push every alert, in order. Failures are logged per record and skipped.
/// Returns how many documents were written.
pub async fn push_all(
    store: Option<&dyn AlertStore>,
    collection: &str,
    alerts: &[AlertRecord],
) -> usize {
    let Some(store) = store else {
        tracing::info!("no remote store; skipping push");
        return 0;
    };

    let mut written = 0usize;
    for alert in alerts {
        match store.add(collection, alert).await {
            Ok(()) => written += 1,
            Err(e) => {
                tracing::warn!(
                    error = ?e,
                    store = store.name(),
                    location = %alert.location,
                    "alert push failed"
                );
                counter!("alerts_store_errors_total").increment(1);
            }
        }
    }
    tracing::info!(store = store.name(), collection, written, total = alerts.len(), "push finished");
    written
}
