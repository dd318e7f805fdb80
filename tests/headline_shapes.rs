// tests/headline_shapes.rs
// Headline shapes the rules are tuned for, and shapes they are known to get wrong.
use disaster_alert_feed::parse::{parse_title, LocationOutcome, Script};

struct Case {
    title: &'static str,
    hours: Option<u32>,
    locations: &'static [&'static str],
    category: Option<&'static str>,
}

fn check(c: &Case) {
    let f = parse_title(c.title);
    assert_eq!(f.duration_hours, c.hours, "duration for {:?}", c.title);
    let want: Vec<String> = c.locations.iter().map(|s| s.to_string()).collect();
    assert_eq!(f.locations, LocationOutcome::Found(want), "locations for {:?}", c.title);
    assert_eq!(f.category.as_deref(), c.category, "category for {:?}", c.title);
}

#[test]
fn known_good_english_shapes() {
    let cases = [
        Case {
            title: "Fog very likely over Delhi, Punjab and Haryana in next 24 hours",
            hours: Some(24),
            locations: &["Delhi", "Punjab", "Haryana"],
            category: Some("Fog"),
        },
        Case {
            title: "[IMD] Thunderstorm with lightning is very likely at few places over \
                    Sindhudurg, Ratnagiri Districts of Maharashtra during next 3 hours",
            hours: Some(3),
            locations: &["Sindhudurg", "Ratnagiri"],
            category: Some("Thunderstorm"),
        },
        Case {
            title: "Moderate rain is likely over plain areas of Jammu and Kathua districts for the next 2 days.",
            hours: Some(48),
            locations: &["Jammu", "Kathua"],
            category: Some("rain"),
        },
        Case {
            title: "Light rain is likely over Goa in past 3 hours",
            hours: Some(3),
            locations: &["Goa"],
            category: Some("rain"),
        },
        Case {
            title: "Moderate rain very likely over plain area of Jammu in next 3 hours",
            hours: Some(3),
            locations: &["Jammu"],
            category: Some("rain"),
        },
        Case {
            title: "Heavy rain is likely in Kerala in next 3 hours",
            hours: Some(3),
            locations: &[],
            category: Some("rain"),
        },
    ];
    for c in &cases {
        check(c);
    }
}

#[test]
fn known_good_hindi_shapes() {
    let cases = [
        Case {
            title: "अगले 3 घंटों में दिल्ली, नोएडा और गाज़ियाबाद में हल्की से मध्यम बारिश",
            hours: Some(3),
            locations: &["दिल्ली", "नोएडा", "गाज़ियाबाद"],
            category: Some("बारिश"),
        },
        Case {
            title: "अगले 3 घंटों में आगरा जनपद में घना कोहरा",
            hours: Some(3),
            locations: &["आगरा"],
            category: Some("कोहरा"),
        },
    ];
    for c in &cases {
        assert_eq!(parse_title(c.title).script, Script::Devanagari);
        check(c);
    }
}

#[test]
fn known_bad_shapes_are_pinned() {
    let cases = [
        // no "likely" and no "with": the last word of the title is the label
        Case {
            title: "Cold wave over Punjab in next 2 days",
            hours: Some(48),
            locations: &["Punjab"],
            category: Some("days"),
        },
        // a "with" clause after the place: it leaks into the location, and the
        // label is cut from the place name
        Case {
            title: "Heavy rain over Kerala with thunderstorm in next 3 hours",
            hours: Some(3),
            locations: &["Kerala with thunderstorm"],
            category: Some("Kerala"),
        },
        // Hindi titles without the "घंटों में" trigger give no places
        Case {
            title: "अगले 2 दिनों में पूर्वी उत्तर प्रदेश में शीतलहर",
            hours: Some(48),
            locations: &[],
            category: Some("शीतलहर"),
        },
        // Hindi fallback label picks the trailing verb
        Case {
            title: "अगले 3 घंटों में पटना में बारिश हो सकती है।",
            hours: Some(3),
            locations: &["पटना"],
            category: Some("है"),
        },
    ];
    for c in &cases {
        check(c);
    }
}

#[test]
fn generic_district_titles_are_discarded() {
    let f = parse_title("आपके जनपद में अगले 3 घंटों में गरज के साथ बारिश");
    assert_eq!(f.locations, LocationOutcome::Discard);
}
