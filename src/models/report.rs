use super::event::ClockEvent;
use chrono::TimeDelta;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum ClockState {
    #[default]
    ClockedOut,
    ClockedIn,
}

impl ClockState {
    pub fn is_clocked_in(&self) -> bool {
        matches!(self, ClockState::ClockedIn)
    }
}

/// State after replaying a user's history, plus the event that produced it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateSnapshot {
    pub state: ClockState,
    pub last_event: Option<ClockEvent>,
}

/// Worked time over one window.
#[derive(Debug, Clone)]
pub struct AggregateReport {
    pub total: TimeDelta,
    pub total_hours: f64,
    pub is_currently_clocked_in: bool,
    pub last_event: Option<ClockEvent>,
}

/// Dashboard figures: calendar day, week and month containing `now`.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub today_hours: f64,
    pub week_hours: f64,
    pub month_hours: f64,
    pub snapshot: StateSnapshot,
    pub recent: Vec<ClockEvent>,
}

/// Events and worked hours for one calendar day.
#[derive(Debug, Clone)]
pub struct DayGroup {
    pub date: chrono::NaiveDate,
    pub events: Vec<ClockEvent>,
    pub total_hours: f64,
}

pub fn hours(d: TimeDelta) -> f64 {
    d.num_milliseconds() as f64 / 3_600_000.0
}
