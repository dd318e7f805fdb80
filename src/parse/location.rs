// src/parse/location.rs
//! Place-name extraction from alert titles.
//!
//! Hindi titles carry their locations between "घंटों में " ("in the coming
//! hours") and the next " में"; English titles between "over" and a cutoff
//! phrase such as "in next" or "during". Both branches split the span on
//! commas and the local word for "and", then strip administrative-unit words.
//!
//! The rules are tuned to observed Sachet headlines. Shapes outside that set
//! (multi-clause titles, new boilerplate) silently under- or mis-extract.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Script;

/// "in your district": a generic alert with no specific place.
const HI_GENERIC_DISTRICT: &str = "आपके जनपद";
const HI_TRIGGER: &str = "घंटों में ";
const HI_SPAN_END: &str = " में";
const HI_AND: &str = " और ";
/// Spellings of "district". The first two are the same word, precomposed
/// (U+095B) and with a combining nukta (U+091C U+093C).
const HI_ADMIN_UNITS: &[&str] = &[
    " \u{095B}\u{093F}\u{0932}\u{093E}",
    " \u{091C}\u{093C}\u{093F}\u{0932}\u{093E}",
    " जिला",
    " जनपद",
    " जिलें",
    " जिल्हा",
];

/// Also covers "few places over": " over " is a substring of it.
const EN_TRIGGER: &str = " over ";
const EN_OVER: &str = "over ";
const EN_CUTOFFS: &[&str] = &[
    " in next",
    " during",
    " for the next",
    " for next",
    " in past",
    " up to",
];

static EN_FILLERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(plain areas of|few places|places over|plain area of)\b").unwrap()
});
static EN_DISTRICTS_OF: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Districts of.*$").unwrap());
static EN_DISTRICTS_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bdistricts\b").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationOutcome {
    /// Place names in title order. May be empty when no trigger phrase is present.
    Found(Vec<String>),
    /// The title addresses "your district" generically; drop the whole item.
    Discard,
}

impl LocationOutcome {
    /// `None` for `Discard`.
    pub fn into_locations(self) -> Option<Vec<String>> {
        match self {
            LocationOutcome::Found(v) => Some(v),
            LocationOutcome::Discard => None,
        }
    }
}

pub fn extract_locations(title: &str, script: Script) -> LocationOutcome {
    match script {
        Script::Devanagari => devanagari_locations(title),
        Script::Latin => LocationOutcome::Found(latin_locations(title)),
    }
}

fn devanagari_locations(title: &str) -> LocationOutcome {
    if title.contains(HI_GENERIC_DISTRICT) {
        return LocationOutcome::Discard;
    }
    let Some(idx) = title.find(HI_TRIGGER) else {
        return LocationOutcome::Found(Vec::new());
    };

    let rest = &title[idx + HI_TRIGGER.len()..];
    let span = match rest.find(HI_SPAN_END) {
        Some(end) => &rest[..end],
        None => rest,
    };

    let locations = span
        .replace(HI_AND, ", ")
        .split(',')
        .filter(|p| !p.trim().is_empty())
        .map(|p| p.trim_matches([' ', '।', ',']))
        .filter_map(strip_hindi_admin_unit)
        .collect();
    LocationOutcome::Found(locations)
}

/// Keep the prefix before the earliest administrative-unit word.
fn strip_hindi_admin_unit(part: &str) -> Option<String> {
    let cut = HI_ADMIN_UNITS
        .iter()
        .filter_map(|w| part.find(w))
        .min()
        .unwrap_or(part.len());
    let name = part[..cut].trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn latin_locations(title: &str) -> Vec<String> {
    // ASCII lowering keeps byte offsets valid for `title`.
    let lower = title.to_ascii_lowercase();
    let Some(idx) = lower.find(EN_TRIGGER) else {
        return Vec::new();
    };

    let start = match lower[idx..].find(EN_OVER) {
        Some(off) => idx + off + EN_OVER.len(),
        None => return Vec::new(),
    };
    let end = EN_CUTOFFS
        .iter()
        .filter_map(|tok| lower[start..].find(tok).map(|off| start + off))
        .min()
        .unwrap_or(title.len());

    let span = EN_FILLERS.replace_all(&title[start..end], "");
    span.replace(" and ", ", ")
        .split(',')
        .filter(|p| !p.trim().is_empty())
        .map(|p| p.trim_matches([' ', '.']))
        .filter_map(|part| {
            let part = EN_DISTRICTS_OF.replace(part, "");
            let part = EN_DISTRICTS_WORD.replace_all(&part, "");
            let part = part.trim();
            (!part.is_empty()).then(|| part.to_string())
        })
        .collect()
}
