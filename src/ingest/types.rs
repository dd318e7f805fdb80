// src/ingest/types.rs
use anyhow::Result;

/// One `<item>` of the feed, as raw strings. Missing elements are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub pub_date: String, // RFC 2822, GMT
}

#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_items(&self) -> Result<Vec<FeedItem>>;
    fn name(&self) -> &'static str;
}
