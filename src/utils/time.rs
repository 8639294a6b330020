//! Time utilities: parsing user-supplied instants and formatting durations.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Parse an instant typed on the command line.
///
/// Accepted forms:
/// - RFC3339 (`2025-03-03T09:00:00Z`, `2025-03-03T09:00:00+01:00`)
/// - `YYYY-MM-DD HH:MM[:SS]` in `tz`
/// - `HH:MM[:SS]` on the current day of `now` in `tz`
pub fn parse_instant<Tz: TimeZone>(s: &str, now: DateTime<Utc>, tz: &Tz) -> AppResult<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            ["%H:%M:%S", "%H:%M"]
                .iter()
                .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
                .map(|t| now.with_timezone(tz).date_naive().and_time(t))
        })
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidTimestamp(format!("{s} does not exist in the local time zone")))
}

/// `7.25` → `"7h 15m"`
pub fn format_hours(h: f64) -> String {
    let total_minutes = (h.max(0.0) * 60.0).floor() as i64;
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}
