use super::{coordinate::Coordinate, event_kind::EventKind, zone::ZoneId};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Serialize;

/// A single clock-in / clock-out record, owned by one user.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClockEvent {
    pub id: i64,                         // ⇔ events.id
    pub user_id: i64,                    // ⇔ events.user_id
    pub kind: EventKind,                 // ⇔ events.kind ('in' | 'out')
    pub timestamp: DateTime<Utc>,        // ⇔ events.timestamp (RFC3339, UTC)
    pub coordinate: Option<Coordinate>,  // ⇔ events.latitude / events.longitude
    pub zone_id: Option<ZoneId>,         // ⇔ events.zone_id (NULL = remote)
    pub source: String,                  // ⇔ events.source (default 'cli')
    pub created_at: String,              // ⇔ events.created_at (ISO8601)
}

impl ClockEvent {
    /// Build a not-yet-persisted event (`id = 0`, `source = "cli"`).
    pub fn new(user_id: i64, kind: EventKind, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            user_id,
            kind,
            timestamp,
            coordinate: None,
            zone_id: None,
            source: "cli".to_string(),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn with_coordinate(mut self, coordinate: Option<Coordinate>) -> Self {
        self.coordinate = coordinate;
        self
    }

    pub fn with_zone(mut self, zone_id: Option<ZoneId>) -> Self {
        self.zone_id = zone_id;
        self
    }

    pub fn date_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.timestamp.with_timezone(tz).format("%Y-%m-%d").to_string()
    }

    pub fn time_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.timestamp.with_timezone(tz).format("%H:%M:%S").to_string()
    }

    pub fn local(&self) -> DateTime<Local> {
        self.timestamp.with_timezone(&Local)
    }
}
