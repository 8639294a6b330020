use crate::errors::{AppError, AppResult};
use chrono::{DateTime, TimeDelta, Utc};

/// Half-open time range `[start, end)` over which worked time is summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Window {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Build a window from epoch milliseconds.
    /// Bounds outside the representable time range are rejected.
    pub fn from_millis(start_ms: i64, end_ms: i64) -> AppResult<Self> {
        let start = DateTime::from_timestamp_millis(start_ms)
            .ok_or_else(|| AppError::InvalidWindow(format!("start {start_ms} out of range")))?;
        let end = DateTime::from_timestamp_millis(end_ms)
            .ok_or_else(|| AppError::InvalidWindow(format!("end {end_ms} out of range")))?;
        Ok(Self { start, end })
    }

    /// An instant window, or one whose end precedes its start, covers nothing.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        t >= self.start && t < self.end
    }

    pub fn length(&self) -> TimeDelta {
        if self.is_empty() {
            TimeDelta::zero()
        } else {
            self.end - self.start
        }
    }
}
