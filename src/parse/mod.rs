// src/parse/mod.rs
//! Title-parsing engine: pure, synchronous extractors over one feed title.
//!
//! Sachet titles come in two scripts. The script is detected once per title
//! ([`Script::detect`]) and handed to the extractors that branch on it
//! (location, category). Duration is script-agnostic: the English pattern is
//! tried first, then the Hindi one.

pub mod category;
pub mod date;
pub mod duration;
pub mod location;

pub use category::extract_category;
pub use date::resolve_pub_date;
pub use duration::extract_duration_hours;
pub use location::{extract_locations, LocationOutcome};

/// Writing system of a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// At least one code point in the Devanagari block (U+0900..=U+097F).
    Devanagari,
    /// Everything else (in practice English).
    Latin,
}

impl Script {
    pub fn detect(text: &str) -> Self {
        if text.chars().any(is_devanagari) {
            Script::Devanagari
        } else {
            Script::Latin
        }
    }
}

pub(crate) fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Everything the engine could pull out of a single title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFields {
    pub script: Script,
    pub duration_hours: Option<u32>,
    pub locations: LocationOutcome,
    pub category: Option<String>,
}

/// Run all title extractors with a single script detection.
pub fn parse_title(title: &str) -> TitleFields {
    let script = Script::detect(title);
    TitleFields {
        script,
        duration_hours: extract_duration_hours(title),
        locations: extract_locations(title, script),
        category: extract_category(title, script),
    }
}
