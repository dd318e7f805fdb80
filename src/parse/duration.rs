// src/parse/duration.rs
use once_cell::sync::Lazy;
use regex::Regex;

// "<n> hour(s)" / "<n> day(s)", any case. Digits are ASCII or Devanagari
// only, the same set `parse_digits` reads.
static EN_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9\x{0966}-\x{096F}]+)\s*(hour|hours|day|days)").unwrap()
});

// "<n> घंटे|घंटों|घंटा" (hours) / "<n> दिनों|दिन" (days)
static HI_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9\x{0966}-\x{096F}]+)\s*(घंटे|घंटों|घंटा|दिनों|दिन)").unwrap()
});

const HI_DAY_ROOT: &str = "दिन";

/// Validity window in hours, from the first duration mention in the title.
///
/// English wins over Hindi when both appear. `None` means the item has no
/// usable window and must be skipped; no default is substituted.
pub fn extract_duration_hours(title: &str) -> Option<u32> {
    if let Some(caps) = EN_DURATION.captures(title) {
        let is_day = caps[2].to_ascii_lowercase().starts_with("day");
        return to_hours(&caps[1], is_day);
    }
    if let Some(caps) = HI_DURATION.captures(title) {
        let is_day = caps[2].contains(HI_DAY_ROOT);
        return to_hours(&caps[1], is_day);
    }
    None
}

fn to_hours(digits: &str, is_day: bool) -> Option<u32> {
    let n = parse_digits(digits)?;
    if is_day {
        n.checked_mul(24)
    } else {
        Some(n)
    }
}

/// Parse a run of ASCII or Devanagari (०-९) digits.
fn parse_digits(digits: &str) -> Option<u32> {
    digits.chars().try_fold(0u32, |acc, c| {
        let d = match c {
            '0'..='9' => c as u32 - '0' as u32,
            '\u{0966}'..='\u{096F}' => c as u32 - 0x0966,
            _ => return None,
        };
        acc.checked_mul(10)?.checked_add(d)
    })
}
