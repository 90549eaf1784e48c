use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

// Offset-carrying layouts not covered by RFC 3339 / RFC 2822.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

// Layouts without an offset; the server renders these in UTC.
const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    // iCalendar DTSTART, e.g. 20210527T215900Z
    "%Y%m%dT%H%M%SZ",
];

/// Parses element text into an instant.
///
/// Surrounding whitespace is ignored. Returns `None` when no known layout
/// matches.
pub fn parse_utc(text: &str) -> Option<DateTime<Utc>> {
    let text: &str = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(naive.and_utc());
        }
    }

    // bare date: UTC midnight
    let date: NaiveDate = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// `parse_utc`, logging text that does not parse.
pub(crate) fn from_text(text: &str) -> Option<DateTime<Utc>> {
    let value: Option<DateTime<Utc>> = parse_utc(text);
    if value.is_none() {
        log::debug!("unparsable timestamp text: {:?}", text.trim());
    }
    value
}
