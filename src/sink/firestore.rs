// src/sink/firestore.rs
use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use super::AlertStore;
use crate::assemble::AlertRecord;

pub const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

#[derive(Debug, Deserialize)]
struct ServiceAccount {
    project_id: String,
}

/// Firestore via the REST API. Each alert becomes one auto-ID document.
///
/// Token minting is out of scope: the caller hands over a bearer token.
#[derive(Clone)]
pub struct FirestoreStore {
    project_id: String,
    token: String,
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl FirestoreStore {
    pub fn from_service_account(sa_json: &str, token: &str) -> Result<Self> {
        let sa: ServiceAccount =
            serde_json::from_str(sa_json).context("parsing service account json")?;
        if sa.project_id.trim().is_empty() {
            return Err(anyhow!("service account json has an empty project_id"));
        }
        if token.trim().is_empty() {
            return Err(anyhow!("empty firestore access token"));
        }
        Ok(Self {
            project_id: sa.project_id,
            token: token.trim().to_string(),
            base_url: FIRESTORE_BASE_URL.to_string(),
            client: Client::new(),
            timeout: Duration::from_secs(10),
        })
    }

    /// Point at another endpoint (emulator, test server).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.base_url, self.project_id, collection
        )
    }
}

/// Firestore document body; every field is a `stringValue`.
pub(crate) fn to_document(alert: &AlertRecord) -> Value {
    json!({
        "fields": {
            "location": { "stringValue": alert.location },
            "type": { "stringValue": alert.category },
            "start": { "stringValue": alert.start.to_rfc3339() },
            "end": { "stringValue": alert.end.to_rfc3339() },
        }
    })
}

#[async_trait::async_trait]
impl AlertStore for FirestoreStore {
    async fn add(&self, collection: &str, alert: &AlertRecord) -> Result<()> {
        self.client
            .post(self.collection_url(collection))
            .bearer_auth(&self.token)
            .timeout(self.timeout)
            .json(&to_document(alert))
            .send()
            .await
            .context("firestore post")?
            .error_for_status()
            .context("firestore non-2xx")?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Firestore"
    }
}
