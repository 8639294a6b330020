use super::coordinate::Coordinate;
use serde::Serialize;

pub type ZoneId = i64;

/// A named circular work location (geofence).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    pub address: String, // display only
    pub center: Coordinate,
    pub radius_meters: f64,
}

impl Zone {
    pub fn new(
        id: ZoneId,
        name: impl Into<String>,
        address: impl Into<String>,
        center: Coordinate,
        radius_meters: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            center,
            radius_meters,
        }
    }
}

/// Look up a zone name by id, as shown in history and export rows.
///
/// - `None` id → `"Remote"`
/// - id not in the list (zone deleted) → `"Unknown"`
pub fn zone_label(zone_id: Option<ZoneId>, zones: &[Zone]) -> &str {
    match zone_id {
        None => "Remote",
        Some(id) => zones
            .iter()
            .find(|z| z.id == id)
            .map(|z| z.name.as_str())
            .unwrap_or("Unknown"),
    }
}
