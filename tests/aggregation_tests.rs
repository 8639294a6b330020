use chrono::{TimeDelta, Utc};
use geoclock::core::calculator::intervals::{
    current_state, open_interval, reconstruct_intervals, sorted,
};
use geoclock::core::calculator::totals::total_duration;
use geoclock::core::logic::Core;
use geoclock::errors::AppError;
use geoclock::models::event::ClockEvent;
use geoclock::models::event_kind::EventKind;
use geoclock::models::report::{ClockState, hours};
use geoclock::models::window::Window;
use geoclock::utils::date::WeekStart;

mod common;
use common::{clock_in, clock_out, utc};

fn window(start: &str, end: &str) -> Window {
    Window::new(utc(start), utc(end))
}

fn monday() -> Window {
    window("2025-03-03T00:00:00Z", "2025-03-04T00:00:00Z")
}

#[test]
fn test_normal_day() {
    let events = vec![
        clock_in("2025-03-03T09:00:00Z"),
        clock_out("2025-03-03T12:00:00Z"),
        clock_in("2025-03-03T13:00:00Z"),
        clock_out("2025-03-03T17:00:00Z"),
    ];
    let now = utc("2025-03-03T20:00:00Z");

    let total = total_duration(&events, &monday(), now);
    assert_eq!(total, TimeDelta::hours(7));
    assert_eq!(hours(total), 7.0);
    assert_eq!(current_state(&events).state, ClockState::ClockedOut);
}

#[test]
fn test_double_clock_in_keeps_latest_start() {
    let events = vec![
        clock_in("2025-03-03T09:00:00Z"),
        clock_in("2025-03-03T10:00:00Z"),
        clock_out("2025-03-03T17:00:00Z"),
    ];

    let intervals = reconstruct_intervals(&events);
    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals[0].start, utc("2025-03-03T10:00:00Z"));
    assert_eq!(intervals[0].end, Some(utc("2025-03-03T17:00:00Z")));

    let total = total_duration(&events, &monday(), utc("2025-03-03T20:00:00Z"));
    assert_eq!(total, TimeDelta::hours(7));
}

#[test]
fn test_orphan_clock_out_is_ignored() {
    let events = vec![clock_out("2025-03-03T09:00:00Z")];

    assert!(reconstruct_intervals(&events).is_empty());
    assert_eq!(
        total_duration(&events, &monday(), utc("2025-03-03T20:00:00Z")),
        TimeDelta::zero()
    );
    let snapshot = current_state(&events);
    assert_eq!(snapshot.state, ClockState::ClockedOut);
    assert_eq!(snapshot.last_event.map(|e| e.kind), Some(EventKind::ClockOut));
}

#[test]
fn test_still_clocked_in_counts_up_to_now() {
    let events = vec![clock_in("2025-03-03T09:00:00Z")];
    let now = utc("2025-03-03T11:30:00Z");

    let total = total_duration(&events, &monday(), now);
    assert_eq!(hours(total), 2.5);
    assert_eq!(current_state(&events).state, ClockState::ClockedIn);

    let open = open_interval(&events).expect("open interval");
    assert!(open.is_open());
    assert_eq!(open.start, utc("2025-03-03T09:00:00Z"));
}

#[test]
fn test_open_interval_ignored_when_now_outside_window() {
    let events = vec![clock_in("2025-03-03T09:00:00Z")];
    let now = utc("2025-03-03T11:30:00Z");

    let morning = window("2025-03-03T00:00:00Z", "2025-03-03T10:00:00Z");
    assert_eq!(total_duration(&events, &morning, now), TimeDelta::zero());

    let sunday = window("2025-03-02T00:00:00Z", "2025-03-03T00:00:00Z");
    assert_eq!(total_duration(&events, &sunday, now), TimeDelta::zero());
}

#[test]
fn test_open_interval_with_now_before_clock_in_is_zero() {
    let events = vec![clock_in("2025-03-03T09:00:00Z")];
    let now = utc("2025-03-03T08:00:00Z");
    assert_eq!(total_duration(&events, &monday(), now), TimeDelta::zero());
}

#[test]
fn test_shift_across_midnight_is_split() {
    let events = vec![
        clock_in("2025-03-03T23:00:00Z"),
        clock_out("2025-03-04T01:00:00Z"),
    ];
    let now = utc("2025-03-05T12:00:00Z");
    let tuesday = window("2025-03-04T00:00:00Z", "2025-03-05T00:00:00Z");
    let both = window("2025-03-03T00:00:00Z", "2025-03-05T00:00:00Z");

    assert_eq!(total_duration(&events, &monday(), now), TimeDelta::hours(1));
    assert_eq!(total_duration(&events, &tuesday, now), TimeDelta::hours(1));
    assert_eq!(total_duration(&events, &both, now), TimeDelta::hours(2));
}

#[test]
fn test_unsorted_input_matches_sorted() {
    let ordered = vec![
        clock_in("2025-03-03T09:00:00Z"),
        clock_out("2025-03-03T12:00:00Z"),
        clock_in("2025-03-03T13:00:00Z"),
        clock_out("2025-03-03T17:00:00Z"),
    ];
    let mut shuffled = ordered.clone();
    shuffled.reverse();
    shuffled.swap(0, 2);

    let now = utc("2025-03-03T20:00:00Z");
    assert_eq!(
        total_duration(&shuffled, &monday(), now),
        total_duration(&ordered, &monday(), now)
    );
    assert_eq!(reconstruct_intervals(&shuffled), reconstruct_intervals(&ordered));
}

#[test]
fn test_equal_timestamps_keep_input_order() {
    let ts = "2025-03-03T09:00:00Z";

    // IN then OUT at the same instant: zero-length pair, dropped
    let in_out = vec![clock_in(ts), clock_out(ts)];
    assert!(reconstruct_intervals(&in_out).is_empty());
    assert_eq!(current_state(&in_out).state, ClockState::ClockedOut);

    // OUT then IN: the OUT is an orphan, the IN stays open
    let out_in = vec![clock_out(ts), clock_in(ts)];
    assert!(reconstruct_intervals(&out_in).is_empty());
    assert_eq!(current_state(&out_in).state, ClockState::ClockedIn);

    let order: Vec<EventKind> = sorted(&out_in).iter().map(|e| e.kind).collect();
    assert_eq!(order, vec![EventKind::ClockOut, EventKind::ClockIn]);
}

#[test]
fn test_interval_invariants() {
    let events: Vec<ClockEvent> = vec![
        clock_in("2025-03-03T08:00:00Z"),
        clock_in("2025-03-03T08:30:00Z"),
        clock_out("2025-03-03T09:00:00Z"),
        clock_out("2025-03-03T09:30:00Z"),
        clock_in("2025-03-03T10:00:00Z"),
        clock_out("2025-03-03T10:00:00Z"),
        clock_in("2025-03-03T11:00:00Z"),
        clock_out("2025-03-03T12:00:00Z"),
        clock_in("2025-03-03T13:00:00Z"),
    ];

    let intervals = reconstruct_intervals(&events);
    assert!(intervals.len() <= events.len() / 2);
    assert_eq!(intervals.len(), 2);
    for iv in &intervals {
        let end = iv.end.expect("closed");
        assert!(end > iv.start);
    }
    assert!(intervals.windows(2).all(|w| w[0].start <= w[1].start));
}

#[test]
fn test_total_is_monotonic_in_window() {
    let events = vec![
        clock_in("2025-03-03T09:00:00Z"),
        clock_out("2025-03-03T17:00:00Z"),
        clock_in("2025-03-04T09:00:00Z"),
    ];
    let now = utc("2025-03-04T12:00:00Z");

    let narrow = window("2025-03-03T10:00:00Z", "2025-03-03T12:00:00Z");
    let wider = window("2025-03-03T00:00:00Z", "2025-03-04T00:00:00Z");
    let widest = window("2025-03-01T00:00:00Z", "2025-03-08T00:00:00Z");

    let a = total_duration(&events, &narrow, now);
    let b = total_duration(&events, &wider, now);
    let c = total_duration(&events, &widest, now);

    assert_eq!(a, TimeDelta::hours(2));
    assert_eq!(b, TimeDelta::hours(8));
    assert_eq!(c, TimeDelta::hours(11));
    assert!(a <= b && b <= c);
}

#[test]
fn test_empty_and_inverted_windows_are_zero() {
    let events = vec![
        clock_in("2025-03-03T09:00:00Z"),
        clock_out("2025-03-03T17:00:00Z"),
    ];
    let now = utc("2025-03-03T20:00:00Z");

    let instant = window("2025-03-03T10:00:00Z", "2025-03-03T10:00:00Z");
    assert!(instant.is_empty());
    assert_eq!(total_duration(&events, &instant, now), TimeDelta::zero());

    let inverted = window("2025-03-03T17:00:00Z", "2025-03-03T09:00:00Z");
    assert_eq!(inverted.length(), TimeDelta::zero());
    assert_eq!(total_duration(&events, &inverted, now), TimeDelta::zero());

    assert_eq!(total_duration(&[], &monday(), now), TimeDelta::zero());
}

#[test]
fn test_window_from_millis() {
    let w = Window::from_millis(0, 3_600_000).unwrap();
    assert_eq!(w.length(), TimeDelta::hours(1));
    assert!(w.contains(w.start));
    assert!(!w.contains(w.end));

    assert!(matches!(
        Window::from_millis(i64::MAX, 0),
        Err(AppError::InvalidWindow(_))
    ));
}

#[test]
fn test_build_report() {
    let events = vec![
        clock_in("2025-03-03T09:00:00Z"),
        clock_out("2025-03-03T12:00:00Z"),
        clock_in("2025-03-03T13:00:00Z"),
    ];
    let report = Core::build_report(&events, &monday(), utc("2025-03-03T14:30:00Z"));

    assert_eq!(report.total, TimeDelta::minutes(270));
    assert_eq!(report.total_hours, 4.5);
    assert!(report.is_currently_clocked_in);
    assert_eq!(
        report.last_event.map(|e| e.timestamp),
        Some(utc("2025-03-03T13:00:00Z"))
    );
}

#[test]
fn test_build_dashboard_windows() {
    let events = vec![
        clock_in("2025-02-28T09:00:00Z"), // previous month
        clock_out("2025-02-28T10:00:00Z"),
        clock_in("2025-03-02T09:00:00Z"), // Sunday
        clock_out("2025-03-02T10:00:00Z"),
        clock_in("2025-03-03T09:00:00Z"), // Monday
        clock_out("2025-03-03T17:00:00Z"),
        clock_in("2025-03-05T09:00:00Z"), // Wednesday, still open
    ];
    let now = utc("2025-03-05T12:00:00Z");

    let sunday_start = Core::build_dashboard(&events, now, &Utc, WeekStart::Sunday, 2);
    assert_eq!(sunday_start.today_hours, 3.0);
    assert_eq!(sunday_start.week_hours, 12.0);
    assert_eq!(sunday_start.month_hours, 12.0);
    assert!(sunday_start.snapshot.state.is_clocked_in());

    assert_eq!(sunday_start.recent.len(), 2);
    assert_eq!(sunday_start.recent[0].timestamp, utc("2025-03-05T09:00:00Z"));
    assert_eq!(sunday_start.recent[1].timestamp, utc("2025-03-03T17:00:00Z"));

    let monday_start = Core::build_dashboard(&events, now, &Utc, WeekStart::Monday, 0);
    assert_eq!(monday_start.week_hours, 11.0);
    assert!(monday_start.recent.is_empty());
}

#[test]
fn test_build_history_groups_by_day() {
    let events = vec![
        clock_out("2025-03-04T01:00:00Z"),
        clock_in("2025-03-03T23:00:00Z"),
    ];
    let days = Core::build_history(&events, utc("2025-03-05T12:00:00Z"), &Utc);

    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date.to_string(), "2025-03-04");
    assert_eq!(days[0].events.len(), 1);
    assert_eq!(days[0].total_hours, 1.0);
    assert_eq!(days[1].date.to_string(), "2025-03-03");
    assert_eq!(days[1].total_hours, 1.0);
}
