//! disaster-alerts — one run over the Sachet feed.
//! Fetch → assemble → print + write JSON → optional remote push.

use anyhow::Result;
use disaster_alert_feed::config::AppConfig;
use disaster_alert_feed::ingest::{self, providers::sachet_rss::SachetRssProvider};
use disaster_alert_feed::sink;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact logs on stderr; stdout carries the JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("disaster_alert_feed=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env locally; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = AppConfig::load()?;
    tracing::debug!(config = ?cfg, "config loaded");

    // Store init problems only disable the push.
    let store = sink::init_store(&cfg);

    let provider = SachetRssProvider::from_config(&cfg.feed)?;
    let report = ingest::run_once(&provider).await?;

    println!("{}", sink::to_json_pretty(&report.alerts)?);
    sink::write_json_file(&cfg.output_path, &report.alerts)?;

    sink::push_all(store.as_deref(), &cfg.collection, &report.alerts).await;
    Ok(())
}
