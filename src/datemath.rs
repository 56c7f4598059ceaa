use chrono::{DateTime, Duration, NaiveDate};

/// Parse a strict ISO `YYYY-MM-DD` date. `NaiveDate` carries no
/// time-of-day, so parsed dates are already normalized to the calendar
/// day.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Signed whole days from `b` to `a`; negative when `a` precedes `b`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days()
}

pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    date + Duration::days(n)
}

/// Format a date-like string as "Mon D, YYYY". Accepts plain dates and
/// RFC 3339 timestamps; anything unparseable comes back unchanged.
pub fn format_friendly(value: &str) -> String {
    let date = parse_date(value).or_else(|| {
        DateTime::parse_from_rfc3339(value.trim())
            .ok()
            .map(|dt| dt.date_naive())
    });
    match date {
        Some(d) => format!("{}", d.format("%b %-d, %Y")),
        None => value.to_string(),
    }
}
