// src/parse/date.rs
use chrono::{DateTime, Utc};
use time::{format_description::well_known::Rfc2822, OffsetDateTime};

/// Named zones with a non-zero offset that chrono knows. Any other alphabetic
/// zone (`IST`, military letters) is read as UTC.
const OFFSET_ZONES: &[&str] = &["EST", "EDT", "CST", "CDT", "MST", "MDT", "PST", "PDT"];

/// Parse an RSS `pubDate` into a UTC instant.
///
/// `time`'s strict RFC 2822 parser goes first; whatever it rejects is retried
/// with chrono's more lenient one, then once more with a long weekday
/// (`Friday,`) dropped and an unknown zone name replaced by `+0000`.
/// Empty or unparsable input → `None`.
pub fn resolve_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    parse_with_time(raw)
        .or_else(|| parse_with_chrono(raw))
        .or_else(|| parse_with_chrono(&relax(raw)?))
}

fn parse_with_chrono(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_with_time(raw: &str) -> Option<DateTime<Utc>> {
    let dt = OffsetDateTime::parse(raw, &Rfc2822).ok()?;
    DateTime::from_timestamp(dt.unix_timestamp(), dt.nanosecond())
}

fn relax(raw: &str) -> Option<String> {
    let mut tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.first().is_some_and(|t| t.ends_with(',')) {
        tokens.remove(0);
    }
    let zone = tokens.pop()?;
    let unknown_name = zone.chars().all(|c| c.is_ascii_alphabetic())
        && !OFFSET_ZONES.iter().any(|z| z.eq_ignore_ascii_case(zone));
    tokens.push(if unknown_name { "+0000" } else { zone });
    Some(tokens.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn gmt_pub_date_resolves_to_utc() {
        let dt = resolve_pub_date("Fri, 05 Jan 2024 10:30:00 GMT").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap());
    }

    #[test]
    fn numeric_offset_is_normalized() {
        let dt = resolve_pub_date("Fri, 05 Jan 2024 16:00:00 +0530").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap());
        assert_eq!(dt.to_rfc3339(), "2024-01-05T10:30:00+00:00");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(resolve_pub_date("  Fri, 05 Jan 2024 10:30:00 +0000 \n").is_some());
    }

    #[test]
    fn long_weekday_and_unknown_zone_name_are_tolerated() {
        let want = Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap();
        assert_eq!(resolve_pub_date("Friday, 05 Jan 2024 10:30:00 GMT"), Some(want));
        // IST is not an RFC 2822 zone; it is read as UTC, not +05:30.
        assert_eq!(resolve_pub_date("Fri, 05 Jan 2024 10:30:00 IST"), Some(want));
        assert_eq!(resolve_pub_date("Friday, 05 Jan 2024 05:30:00 EST"), Some(want));
    }

    #[test]
    fn empty_and_garbage_are_none() {
        assert_eq!(resolve_pub_date(""), None);
        assert_eq!(resolve_pub_date("   "), None);
        assert_eq!(resolve_pub_date("yesterday afternoon"), None);
        assert_eq!(resolve_pub_date("2024-01-05"), None);
        assert_eq!(resolve_pub_date("sometime on Friday"), None);
    }
}
