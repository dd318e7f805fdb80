// src/assemble.rs
//! Alert assembly: one feed item → zero or more `AlertRecord`s.
//!
//! The assembler owns the run-scoped dedup set. Create one per run; records
//! come out in feed order, then title location order.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::ingest::types::FeedItem;
use crate::parse;

fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("alerts_items_total", "Feed items seen by the assembler.");
        describe_counter!(
            "alerts_skipped_total",
            "Feed items dropped without producing alerts, by reason."
        );
        describe_counter!("alerts_emitted_total", "Alert records emitted.");
        describe_counter!(
            "alerts_dedup_total",
            "Alert records dropped as exact duplicates within a run."
        );
    });
}

/// A single place-scoped alert. Serialized as `{location, type, start, end}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlertRecord {
    pub location: String,
    #[serde(rename = "type")]
    pub category: String,
    #[serde(with = "rfc3339_offset")]
    pub start: DateTime<Utc>,
    #[serde(with = "rfc3339_offset")]
    pub end: DateTime<Utc>,
}

/// Why a feed item produced nothing. Skips are expected; they are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingTitle,
    MissingDate,
    UnparsableDate,
    UnknownDuration,
    GenericDistrict,
    NoCategory,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MissingTitle => "missing_title",
            SkipReason::MissingDate => "missing_date",
            SkipReason::UnparsableDate => "unparsable_date",
            SkipReason::UnknownDuration => "unknown_duration",
            SkipReason::GenericDistrict => "generic_district",
            SkipReason::NoCategory => "no_category",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    pub alerts: Vec<AlertRecord>,
    pub items: usize,
    pub skipped: usize,
    pub duplicates: usize,
}

#[derive(Debug, Default)]
pub struct AlertAssembler {
    seen: HashSet<AlertRecord>,
    duplicates: usize,
}

impl AlertAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one item and return the records it contributes that were not
    /// already emitted in this run.
    pub fn push_item(&mut self, item: &FeedItem) -> Result<Vec<AlertRecord>, SkipReason> {
        ensure_metrics_described();
        counter!("alerts_items_total").increment(1);

        let out = self.build(item);
        match &out {
            Ok(fresh) => counter!("alerts_emitted_total").increment(fresh.len() as u64),
            Err(reason) => {
                counter!("alerts_skipped_total", "reason" => reason.as_str()).increment(1);
                tracing::debug!(
                    target: "assemble",
                    reason = reason.as_str(),
                    title = %item.title,
                    "item skipped"
                );
            }
        }
        out
    }

    fn build(&mut self, item: &FeedItem) -> Result<Vec<AlertRecord>, SkipReason> {
        let title = item.title.trim();
        if title.is_empty() {
            return Err(SkipReason::MissingTitle);
        }
        if item.pub_date.trim().is_empty() {
            return Err(SkipReason::MissingDate);
        }
        let start = parse::resolve_pub_date(&item.pub_date).ok_or(SkipReason::UnparsableDate)?;

        let fields = parse::parse_title(title);
        let end = fields
            .duration_hours
            .and_then(|h| start.checked_add_signed(Duration::hours(i64::from(h))))
            .ok_or(SkipReason::UnknownDuration)?;
        let locations = fields
            .locations
            .into_locations()
            .ok_or(SkipReason::GenericDistrict)?;
        if locations.is_empty() {
            return Ok(Vec::new());
        }
        let category = fields.category.ok_or(SkipReason::NoCategory)?;

        let mut fresh = Vec::with_capacity(locations.len());
        for location in locations {
            let record = AlertRecord {
                location,
                category: category.clone(),
                start,
                end,
            };
            if self.seen.insert(record.clone()) {
                fresh.push(record);
            } else {
                self.duplicates += 1;
                counter!("alerts_dedup_total").increment(1);
            }
        }
        Ok(fresh)
    }

    /// Process `items` in order, accumulating into one report.
    pub fn assemble(&mut self, items: &[FeedItem]) -> AssemblyReport {
        let dup_before = self.duplicates;
        let mut report = AssemblyReport {
            items: items.len(),
            ..AssemblyReport::default()
        };
        for item in items {
            match self.push_item(item) {
                Ok(mut fresh) => report.alerts.append(&mut fresh),
                Err(_) => report.skipped += 1,
            }
        }
        report.duplicates = self.duplicates - dup_before;
        report
    }
}

/// One-shot helper: a fresh assembler over `items`.
pub fn assemble_alerts(items: &[FeedItem]) -> AssemblyReport {
    AlertAssembler::new().assemble(items)
}

/// RFC 3339 with an explicit `+00:00` offset (chrono's default serde uses `Z`).
mod rfc3339_offset {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
