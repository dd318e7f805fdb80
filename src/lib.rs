// src/lib.rs
// Public library surface for the binary and integration tests.

// Title-parsing engine (pure, sync)
pub mod parse;
pub mod assemble;

// Feed input, run config, outputs
pub mod config;
pub mod ingest;
pub mod sink;

// ---- Re-exports for stable public API ----
pub use crate::assemble::{assemble_alerts, AlertAssembler, AlertRecord, AssemblyReport, SkipReason};
pub use crate::ingest::types::{FeedItem, FeedSource};
pub use crate::sink::AlertStore;
