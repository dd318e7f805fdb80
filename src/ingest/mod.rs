// src/ingest/mod.rs
pub mod config;
pub mod providers;
pub mod types;

use anyhow::{Context, Result};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use once_cell::sync::OnceCell;
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::assemble::{AlertAssembler, AssemblyReport};
use crate::ingest::types::{FeedItem, FeedSource};

fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("alerts_feed_errors_total", "Feed fetch/parse errors.");
        describe_histogram!("alerts_feed_parse_ms", "Feed XML parse time in milliseconds.");
    });
}

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
}

/// Parse an RSS 2.0 document into feed items, in document order.
pub fn parse_feed_xml(xml: &str) -> Result<Vec<FeedItem>> {
    ensure_metrics_described();
    let t0 = std::time::Instant::now();

    let xml_clean = scrub_html_entities_for_xml(xml);
    let rss: Rss = from_str(&xml_clean).context("parsing feed rss xml")?;
    let items: Vec<FeedItem> = rss
        .channel
        .item
        .into_iter()
        .map(|it| FeedItem {
            title: normalize_title(it.title.as_deref().unwrap_or_default()),
            pub_date: it.pub_date.unwrap_or_default().trim().to_string(),
        })
        .collect();

    histogram!("alerts_feed_parse_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);
    Ok(items)
}

/// Decode HTML entities left inside the title text and trim it.
///
/// Inner whitespace is kept as-is; the extraction rules match on exact
/// single-space phrases.
pub fn normalize_title(s: &str) -> String {
    html_escape::decode_html_entities(s).trim().to_string()
}

/// Entities that are valid HTML but not XML; quick-xml rejects them.
fn scrub_html_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}

/// Fetch once from `source` and assemble alerts with a fresh dedup set.
///
/// A fetch or parse failure aborts the run; per-item problems never do.
pub async fn run_once(source: &dyn FeedSource) -> Result<AssemblyReport> {
    ensure_metrics_described();

    let items = match source.fetch_items().await {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(error = ?e, source = source.name(), "feed fetch failed");
            counter!("alerts_feed_errors_total").increment(1);
            return Err(e).with_context(|| format!("fetching feed from {}", source.name()));
        }
    };

    let report = AlertAssembler::new().assemble(&items);
    tracing::info!(
        target: "ingest",
        source = source.name(),
        items = report.items,
        alerts = report.alerts.len(),
        skipped = report.skipped,
        duplicates = report.duplicates,
        "feed assembled"
    );
    Ok(report)
}
