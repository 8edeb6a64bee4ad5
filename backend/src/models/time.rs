use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};

/// Accepted wall-clock layouts, tried in order.
///
/// `%.f` consumes an optional fractional part, so `12:30:00` and `12:30:00.250`
/// both match the first two entries.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Parse a trip timestamp cell into a naive wall-clock datetime.
///
/// Offsets (RFC 3339) are dropped after conversion: the hour-of-day filters
/// operate on the local time recorded in the dataset.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Hour of day (0-23) of a timestamp.
pub fn hour_of_day(dt: &NaiveDateTime) -> u8 {
    // Timelike::hour is always < 24
    dt.hour() as u8
}
