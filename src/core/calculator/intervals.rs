use crate::models::event::ClockEvent;
use crate::models::event_kind::EventKind;
use crate::models::interval::Interval;
use crate::models::report::{ClockState, StateSnapshot};

/// Result of replaying a history through the in/out state machine.
#[derive(Debug, Default)]
pub struct Timeline<'a> {
    pub intervals: Vec<Interval>,
    pub open: Option<&'a ClockEvent>,
    pub last: Option<&'a ClockEvent>,
}

/// Events in ascending timestamp order.
///
/// The sort is stable: events sharing a timestamp keep their input order.
/// Storage may hand events back newest-first, so every query starts here.
pub fn sorted(events: &[ClockEvent]) -> Vec<&ClockEvent> {
    let mut out: Vec<&ClockEvent> = events.iter().collect();
    out.sort_by_key(|e| e.timestamp);
    out
}

/// Single forward pass over the sorted history.
///
/// - IN while clocked out opens an interval
/// - IN while already clocked in replaces the open start (earlier IN is abandoned)
/// - OUT while clocked in closes `[in, out)`
/// - OUT while clocked out is ignored
pub fn build_timeline(events: &[ClockEvent]) -> Timeline<'_> {
    let ordered = sorted(events);

    let mut intervals = Vec::new();
    let mut open: Option<&ClockEvent> = None;

    for &ev in &ordered {
        match ev.kind {
            EventKind::ClockIn => open = Some(ev),
            EventKind::ClockOut => {
                if let Some(start) = open.take()
                    && ev.timestamp > start.timestamp
                {
                    intervals.push(Interval {
                        start: start.timestamp,
                        end: Some(ev.timestamp),
                        zone_id: start.zone_id,
                    });
                }
            }
        }
    }

    Timeline {
        intervals,
        open,
        last: ordered.last().copied(),
    }
}

/// Closed intervals, chronological. Zero-length pairs are dropped.
pub fn reconstruct_intervals(events: &[ClockEvent]) -> Vec<Interval> {
    build_timeline(events).intervals
}

/// The trailing unmatched clock-in, as an open interval.
pub fn open_interval(events: &[ClockEvent]) -> Option<Interval> {
    build_timeline(events).open.map(|ev| Interval {
        start: ev.timestamp,
        end: None,
        zone_id: ev.zone_id,
    })
}

pub fn current_state(events: &[ClockEvent]) -> StateSnapshot {
    let timeline = build_timeline(events);

    StateSnapshot {
        state: if timeline.open.is_some() {
            ClockState::ClockedIn
        } else {
            ClockState::ClockedOut
        },
        last_event: timeline.last.cloned(),
    }
}
