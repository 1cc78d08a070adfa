use chrono::{
    DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc,
};
use serde_json::Value;

/// Reads a chat timestamp: RFC 3339 text, a naive date-time or date (taken as UTC),
/// or epoch milliseconds.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(raw) => parse_timestamp_str(raw),
        Value::Number(number) => {
            let millis = number.as_f64()?;
            if !millis.is_finite() {
                return None;
            }
            Utc.timestamp_millis_opt(millis.trunc() as i64)
                .single()
                .filter(has_four_digit_year)
        }
        _ => None,
    }
}

pub fn parse_timestamp_str(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        Some(parsed.with_timezone(&Utc))
    } else if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        Some(naive.and_utc())
    } else if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc())
    } else {
        None
    };

    parsed.filter(has_four_digit_year)
}

/// Years 0..=9999 keep the ISO form fixed-width, so text order matches time order.
fn has_four_digit_year(timestamp: &DateTime<Utc>) -> bool {
    (0..=9999).contains(&timestamp.year())
}

/// Canonical ISO-8601 UTC form, e.g. `2026-02-24T10:00:00.000Z`; sorts chronologically as text.
pub fn to_iso_string(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Inbox label relative to `now`: `3:45 PM` today, `Yesterday`, else `Feb 23`.
///
/// Calendar days are taken in `now`'s time zone. Unparseable input renders as an empty string.
pub fn format_relative_time<Tz: TimeZone>(value: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let Some(timestamp) = parse_timestamp_str(value) else {
        return String::new();
    };
    let local = timestamp.with_timezone(&now.timezone());

    let today = now.date_naive();
    let day = local.date_naive();
    if day == today {
        local.format("%-I:%M %p").to_string()
    } else if Some(day) == today.checked_sub_signed(Duration::days(1)) {
        "Yesterday".to_string()
    } else {
        local.format("%b %-d").to_string()
    }
}

pub fn format_relative_time_local(value: &str) -> String {
    format_relative_time(value, &Local::now())
}
