// src/export/model.rs

use crate::core::calculator::intervals::sorted;
use crate::models::event::ClockEvent;
use crate::models::user::User;
use crate::models::zone::{Zone, zone_label};
use chrono::TimeZone;
use serde::Serialize;

/// One flat export row per raw clock event.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ExportRow {
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Coordinates")]
    pub coordinates: String,
}

pub const HEADERS: [&str; 7] = [
    "User",
    "Email",
    "Type",
    "Date",
    "Time",
    "Location",
    "Coordinates",
];

/// Build export rows in chronological order, dates and times rendered in `tz`.
///
/// Events whose owner is missing from `users` are exported as `Unknown`.
pub fn build_rows<Tz: TimeZone>(
    events: &[ClockEvent],
    users: &[User],
    zones: &[Zone],
    tz: &Tz,
) -> Vec<ExportRow>
where
    Tz::Offset: std::fmt::Display,
{
    sorted(events)
        .into_iter()
        .map(|ev| {
            let owner = users.iter().find(|u| u.id == ev.user_id);

            ExportRow {
                user: owner
                    .map(User::display_name)
                    .unwrap_or_else(|| "Unknown".to_string()),
                email: owner.map(|u| u.email.clone()).unwrap_or_default(),
                kind: ev.kind.label().to_string(),
                date: ev.date_in(tz),
                time: ev.time_in(tz),
                location: zone_label(ev.zone_id, zones).to_string(),
                coordinates: ev.coordinate.map(|c| c.to_string()).unwrap_or_default(),
            }
        })
        .collect()
}
