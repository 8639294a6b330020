use crate::core::calculator::{intervals, totals};
use crate::models::event::ClockEvent;
use crate::models::report::{AggregateReport, Dashboard, DayGroup, hours};
use crate::models::window::Window;
use crate::utils::date::{WeekStart, day_window, month_window, week_window};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::collections::BTreeMap;

pub struct Core;

impl Core {
    pub fn build_report(events: &[ClockEvent], window: &Window, now: DateTime<Utc>) -> AggregateReport {
        let total = totals::total_duration(events, window, now);
        let snapshot = intervals::current_state(events);

        AggregateReport {
            total,
            total_hours: hours(total),
            is_currently_clocked_in: snapshot.state.is_clocked_in(),
            last_event: snapshot.last_event,
        }
    }

    /// Today / this week / this month totals, computed on calendar windows in `tz`.
    pub fn build_dashboard<Tz: TimeZone>(
        events: &[ClockEvent],
        now: DateTime<Utc>,
        tz: &Tz,
        week_start: WeekStart,
        recent: usize,
    ) -> Dashboard {
        let today = now.with_timezone(tz).date_naive();

        let day = day_window(today, tz);
        let week = week_window(today, week_start, tz);
        let month = month_window(today, tz);

        let mut newest_first: Vec<ClockEvent> = intervals::sorted(events).into_iter().cloned().collect();
        newest_first.reverse();
        newest_first.truncate(recent);

        Dashboard {
            today_hours: hours(totals::total_duration(events, &day, now)),
            week_hours: hours(totals::total_duration(events, &week, now)),
            month_hours: hours(totals::total_duration(events, &month, now)),
            snapshot: intervals::current_state(events),
            recent: newest_first,
        }
    }

    /// Group events by calendar day in `tz`, most recent day first.
    ///
    /// Each day's total is computed over the whole history clipped to that
    /// day, so a shift crossing midnight is split between the two days.
    pub fn build_history<Tz: TimeZone>(
        events: &[ClockEvent],
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Vec<DayGroup> {
        let mut by_day: BTreeMap<NaiveDate, Vec<ClockEvent>> = BTreeMap::new();

        for ev in intervals::sorted(events) {
            let date = ev.timestamp.with_timezone(tz).date_naive();
            by_day.entry(date).or_default().push(ev.clone());
        }

        by_day
            .into_iter()
            .rev()
            .map(|(date, day_events)| {
                let window = day_window(date, tz);
                DayGroup {
                    date,
                    events: day_events,
                    total_hours: hours(totals::total_duration(events, &window, now)),
                }
            })
            .collect()
    }
}
