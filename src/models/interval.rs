use super::zone::ZoneId;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

/// A worked period reconstructed from a matched clock-in / clock-out.
/// `end == None` marks an open interval (still clocked in).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub zone_id: Option<ZoneId>,
}

impl Interval {
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Length of the part of the interval inside `[from, to)`.
    /// An open interval is treated as ending at `to`.
    pub fn overlap(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> TimeDelta {
        let start = self.start.max(from);
        let end = self.end.map_or(to, |e| e.min(to));
        if end > start {
            end - start
        } else {
            TimeDelta::zero()
        }
    }
}
