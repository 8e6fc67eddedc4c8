use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value;

/// Championship points for positions 1 through 10.
const POINTS_SYSTEM: [u32; 10] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];

pub fn points_for(position: u32) -> u32 {
    match position {
        1..=10 => POINTS_SYSTEM[(position - 1) as usize],
        _ => 0,
    }
}

/// Renders a lap duration in seconds as `M:SS.mmm`.
pub fn format_lap_time(duration: f64) -> String {
    let minutes = (duration / 60.0).floor() as u64;
    let seconds = duration % 60.0;
    format!("{minutes}:{seconds:06.3}")
}

/// Default start time for schedule entries that only carry a date.
pub fn race_start_time() -> NaiveTime {
    NaiveTime::from_hms_opt(15, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Parses an upstream timestamp. Full timestamps without an offset are taken
/// as UTC; date-only values are placed at `date_only_at`.
pub fn parse_datetime(raw: &str, date_only_at: NaiveTime) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.contains('T') || raw.contains(' ') {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        let naive = raw.replace(' ', "T");
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(&naive, fmt) {
                return Some(dt.and_utc());
            }
        }
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(date_only_at).and_utc())
}

pub fn format_race_date(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Human readable countdown from `now` to `target`.
pub fn time_left(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = target - now;
    if delta < chrono::Duration::zero() {
        return "Race completed".to_string();
    }
    let total = delta.num_seconds();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;

    if days > 0 {
        format!("{days} days, {hours} hours")
    } else if hours > 0 {
        format!("{hours} hours, {minutes} minutes")
    } else {
        format!("{minutes} minutes")
    }
}

/// Countdown for a raw timestamp string; date-only values count to midnight UTC.
pub fn time_left_raw(raw: &str, now: DateTime<Utc>) -> String {
    match parse_datetime(raw, NaiveTime::MIN) {
        Some(target) => time_left(target, now),
        None => {
            tracing::error!(raw, "Error calculating time left: unparseable date");
            "Unknown".to_string()
        }
    }
}

/// First of `keys` holding a string value.
pub fn str_field<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| record.get(*key).and_then(Value::as_str))
}

pub fn str_field_or(record: &Value, keys: &[&str], default: &str) -> String {
    str_field(record, keys).unwrap_or(default).to_string()
}

/// Numeric field that may also arrive as a numeric string.
pub fn number_field(record: &Value, key: &str) -> Option<f64> {
    match record.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

pub fn u32_field(record: &Value, key: &str) -> Option<u32> {
    record
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}
