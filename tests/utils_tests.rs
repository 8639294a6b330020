use chrono::{FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use geoclock::errors::AppError;
use geoclock::utils::date::{
    WeekStart, day_window, month_window, parse_range, period_bounds, start_of_day, week_window,
};
use geoclock::utils::format_hours;
use geoclock::utils::time::parse_instant;

mod common;
use common::utc;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_parse_instant_forms() {
    let now = utc("2025-03-05T12:00:00Z");

    assert_eq!(
        parse_instant("2025-03-03T09:00:00+01:00", now, &Utc).unwrap(),
        utc("2025-03-03T08:00:00Z")
    );
    assert_eq!(
        parse_instant("2025-03-03 09:15", now, &Utc).unwrap(),
        utc("2025-03-03T09:15:00Z")
    );
    assert_eq!(
        parse_instant("08:30", now, &Utc).unwrap(),
        utc("2025-03-05T08:30:00Z")
    );
    assert!(matches!(
        parse_instant("25:99", now, &Utc),
        Err(AppError::InvalidTimestamp(_))
    ));
}

#[test]
fn test_format_hours() {
    assert_eq!(format_hours(7.25), "7h 15m");
    assert_eq!(format_hours(0.0), "0h 0m");
    assert_eq!(format_hours(-1.0), "0h 0m");
}

#[test]
fn test_period_bounds_and_ranges() {
    assert_eq!(period_bounds("2025").unwrap(), (d("2025-01-01"), d("2025-12-31")));
    assert_eq!(period_bounds("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
    assert_eq!(period_bounds("2025-03-03").unwrap(), (d("2025-03-03"), d("2025-03-03")));
    assert!(period_bounds("March").is_err());

    assert_eq!(
        parse_range("2025-01:2025-03").unwrap(),
        (d("2025-01-01"), d("2025-03-31"))
    );
    assert!(parse_range("2025-03:2025-01").is_err());
}

#[test]
fn test_week_and_month_windows() {
    // Wednesday
    let day = d("2025-03-05");

    let sunday = week_window(day, WeekStart::Sunday, &Utc);
    assert_eq!(sunday.start, utc("2025-03-02T00:00:00Z"));
    assert_eq!(sunday.end, utc("2025-03-09T00:00:00Z"));

    let monday = week_window(day, WeekStart::Monday, &Utc);
    assert_eq!(monday.start, utc("2025-03-03T00:00:00Z"));
    assert_eq!(monday.end, utc("2025-03-10T00:00:00Z"));

    let month = month_window(day, &Utc);
    assert_eq!(month.start, utc("2025-03-01T00:00:00Z"));
    assert_eq!(month.end, utc("2025-04-01T00:00:00Z"));
}

/// UTC+3 zone in which local 00:00-00:59 on 2025-03-30 does not exist.
#[derive(Clone, Copy, Debug)]
struct MidnightGap;

fn plus_three() -> FixedOffset {
    FixedOffset::east_opt(3 * 3600).unwrap()
}

impl TimeZone for MidnightGap {
    type Offset = FixedOffset;

    fn from_offset(_: &FixedOffset) -> Self {
        MidnightGap
    }

    fn offset_from_local_date(&self, _: &NaiveDate) -> LocalResult<FixedOffset> {
        LocalResult::Single(plus_three())
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
        if local.date() == d("2025-03-30") && local.hour() == 0 {
            LocalResult::None
        } else {
            LocalResult::Single(plus_three())
        }
    }

    fn offset_from_utc_date(&self, _: &NaiveDate) -> FixedOffset {
        plus_three()
    }

    fn offset_from_utc_datetime(&self, _: &NaiveDateTime) -> FixedOffset {
        plus_three()
    }
}

#[test]
fn test_start_of_day_in_local_time() {
    let tz = FixedOffset::east_opt(3600).unwrap();
    assert_eq!(start_of_day(d("2025-03-03"), &tz), utc("2025-03-02T23:00:00Z"));

    let day = day_window(d("2025-03-03"), &tz);
    assert_eq!(day.end, utc("2025-03-03T23:00:00Z"));
}

#[test]
fn test_start_of_day_skips_missing_midnight() {
    // first existing local instant is 01:00+03:00
    assert_eq!(
        start_of_day(d("2025-03-30"), &MidnightGap),
        utc("2025-03-29T22:00:00Z")
    );
    assert_eq!(
        start_of_day(d("2025-03-31"), &MidnightGap),
        utc("2025-03-30T21:00:00Z")
    );
}
