// src/parse/category.rs
use once_cell::sync::Lazy;
use regex::Regex;

use super::Script;

/// "fog": the one Hindi category recognized by keyword.
const HI_FOG: &str = "कोहरा";

// "[is] [very] likely", any case
static EN_LIKELY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:is\s*)?(?:very\s*)?likely").unwrap());

/// One-word disaster label for a title, e.g. "Fog", "Thunderstorm", "कोहरा".
///
/// English: the last word before " with " / "is very likely". Hindi: "कोहरा"
/// if present, otherwise the last word of the title (a last-resort label,
/// not a real classification). `None` for degenerate titles.
pub fn extract_category(title: &str, script: Script) -> Option<String> {
    let phrase = strip_leading_markers(title);
    let label = match script {
        Script::Devanagari if phrase.contains(HI_FOG) => HI_FOG,
        Script::Devanagari => phrase.split_whitespace().last()?.trim_matches([' ', '।', ',']),
        Script::Latin => latin_label(phrase)?,
    };
    (!label.is_empty()).then(|| label.to_string())
}

/// Drop a leading "(...)" timestamp, then a leading "[...]" tag.
fn strip_leading_markers(title: &str) -> &str {
    let mut s = title;
    if s.starts_with('(') {
        s = s.split_once(')').map_or(s, |(_, rest)| rest).trim();
    }
    if s.starts_with('[') {
        s = s.split_once(']').map_or(s, |(_, rest)| rest).trim();
    }
    s
}

fn latin_label(phrase: &str) -> Option<&str> {
    let mut s = phrase;
    if let Some((head, _)) = s.split_once(" with ") {
        s = head;
    }
    if let Some(m) = EN_LIKELY.find(s) {
        s = &s[..m.start()];
    }
    Some(s.split_whitespace().last()?.trim_matches([' ', '.']))
}
