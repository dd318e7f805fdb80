// src/sink/memory.rs
use anyhow::{anyhow, Result};
use std::sync::Mutex;

use super::AlertStore;
use crate::assemble::AlertRecord;

/// In-process store, for tests and dry runs. Optionally rejects one location.
#[derive(Default)]
pub struct MemoryStore {
    docs: Mutex<Vec<(String, AlertRecord)>>,
    fail_location: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(location: &str) -> Self {
        Self {
            docs: Mutex::new(Vec::new()),
            fail_location: Some(location.to_string()),
        }
    }

    /// `(collection, alert)` pairs in insertion order.
    pub fn documents(&self) -> Vec<(String, AlertRecord)> {
        self.docs.lock().expect("memory store mutex poisoned").clone()
    }
}

#[async_trait::async_trait]
impl AlertStore for MemoryStore {
    async fn add(&self, collection: &str, alert: &AlertRecord) -> Result<()> {
        if self.fail_location.as_deref() == Some(alert.location.as_str()) {
            return Err(anyhow!("rejected location {}", alert.location));
        }
        self.docs
            .lock()
            .map_err(|_| anyhow!("memory store mutex poisoned"))?
            .push((collection.to_string(), alert.clone()));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Memory"
    }
}
