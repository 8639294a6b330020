use crate::models::window::Window;
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

/// First instant of `date` in `tz`, as UTC.
/// When local midnight falls in a DST gap the day starts at the first
/// whole hour that exists.
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    (0..24)
        .filter_map(|h| date.and_hms_opt(h, 0, 0))
        .find_map(|t| tz.from_local_datetime(&t).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN).and_utc())
}

/// `[first day 00:00, day after last 00:00)` in `tz`.
pub fn window_for_days<Tz: TimeZone>(first: NaiveDate, last: NaiveDate, tz: &Tz) -> Window {
    let after = last.checked_add_days(Days::new(1)).unwrap_or(last);
    Window::new(start_of_day(first, tz), start_of_day(after, tz))
}

pub fn day_window<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Window {
    window_for_days(date, date, tz)
}

pub fn week_window<Tz: TimeZone>(date: NaiveDate, week_start: WeekStart, tz: &Tz) -> Window {
    let offset = match week_start {
        WeekStart::Sunday => date.weekday().num_days_from_sunday(),
        WeekStart::Monday => date.weekday().num_days_from_monday(),
    };
    let first = date - Days::new(offset as u64);
    window_for_days(first, first + Days::new(6), tz)
}

pub fn month_window<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Window {
    let first = date.with_day(1).unwrap_or(date);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(first);
    window_for_days(first, last, tz)
}

/// Expand a single period token into its first and last day.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .ok_or_else(|| format!("Invalid period: {p}"))?;
        return Ok((first, last));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {p}"))
}

/// Parse `P` or `P1:P2` into an inclusive day range.
pub fn parse_range(r: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if let Some((a, b)) = r.split_once(':') {
        let (start, _) = period_bounds(a)?;
        let (_, end) = period_bounds(b)?;
        if end < start {
            return Err(format!("Invalid range: {r} (end before start)"));
        }
        return Ok((start, end));
    }
    period_bounds(r)
}
