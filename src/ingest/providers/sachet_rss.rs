// src/ingest/providers/sachet_rss.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

use crate::ingest::config::FeedConfig;
use crate::ingest::parse_feed_xml;
use crate::ingest::types::{FeedItem, FeedSource};

/// NDMA Sachet CAP RSS feed, read from a fixture or over HTTP.
pub struct SachetRssProvider {
    mode: Mode,
}

enum Mode {
    Fixture(String),
    Http { url: String, client: reqwest::Client },
}

impl SachetRssProvider {
    pub fn from_fixture(xml: &str) -> Self {
        Self {
            mode: Mode::Fixture(xml.to_string()),
        }
    }

    /// HTTP mode: configured user agent and timeout, plus an optional extra CA bundle.
    pub fn from_config(cfg: &FeedConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(cfg.user_agent.clone())
            .timeout(Duration::from_secs(cfg.timeout_secs));

        if let Some(path) = &cfg.ca_bundle_path {
            let pem = std::fs::read(path)
                .with_context(|| format!("reading CA bundle {}", path.display()))?;
            let certs = reqwest::Certificate::from_pem_bundle(&pem)
                .with_context(|| format!("parsing CA bundle {}", path.display()))?;
            tracing::debug!(path = %path.display(), count = certs.len(), "extra root certificates loaded");
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        let client = builder.build().context("building feed http client")?;
        Ok(Self {
            mode: Mode::Http {
                url: cfg.url.clone(),
                client,
            },
        })
    }
}

#[async_trait]
impl FeedSource for SachetRssProvider {
    async fn fetch_items(&self) -> Result<Vec<FeedItem>> {
        match &self.mode {
            Mode::Fixture(xml) => parse_feed_xml(xml),
            Mode::Http { url, client } => {
                let body = client
                    .get(url.as_str())
                    .send()
                    .await
                    .context("sachet http get()")?
                    .error_for_status()
                    .context("sachet http status")?
                    .text()
                    .await
                    .context("sachet http .text()")?;
                parse_feed_xml(&body)
            }
        }
    }

    fn name(&self) -> &'static str {
        "Sachet"
    }
}
