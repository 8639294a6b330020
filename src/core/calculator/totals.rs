use crate::core::calculator::intervals::build_timeline;
use crate::models::event::ClockEvent;
use crate::models::window::Window;
use chrono::{DateTime, TimeDelta, Utc};

/// Worked time inside `window`.
///
/// Closed intervals are clipped to the window. A trailing open clock-in
/// counts only when `now` lies inside the window, and then runs up to
/// `now`. Never negative; zero for an empty or inverted window.
pub fn total_duration(events: &[ClockEvent], window: &Window, now: DateTime<Utc>) -> TimeDelta {
    if window.is_empty() {
        return TimeDelta::zero();
    }

    let timeline = build_timeline(events);

    let mut total = timeline
        .intervals
        .iter()
        .map(|iv| iv.overlap(window.start, window.end))
        .fold(TimeDelta::zero(), |acc, d| acc + d);

    if let Some(open) = timeline.open
        && window.contains(now)
        && now > open.timestamp
    {
        let start = open.timestamp.max(window.start);
        let end = now.min(window.end);
        if end > start {
            total += end - start;
        }
    }

    total
}
