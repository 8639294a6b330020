//! Geofence resolution: which work zone (if any) contains a point.

use crate::errors::{AppError, AppResult};
use crate::models::coordinate::Coordinate;
use crate::models::zone::Zone;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two points, in meters.
pub fn distance_meters(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // rounding can push h slightly outside [0, 1] near antipodes
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

fn validate_zone(zone: &Zone) -> AppResult<()> {
    zone.center.validate()?;
    if !zone.radius_meters.is_finite() {
        return Err(AppError::InvalidCoordinate(format!(
            "zone '{}' has a non-finite radius",
            zone.name
        )));
    }
    if zone.radius_meters < 0.0 {
        return Err(AppError::InvalidZone(format!(
            "zone '{}' has a negative radius ({})",
            zone.name, zone.radius_meters
        )));
    }
    Ok(())
}

/// Return the zone containing `point`.
///
/// - a zone contains the point when `distance <= radius` (boundary included)
/// - among several containing zones the nearest wins
/// - on an exact distance tie, the zone listed first wins
/// - `Ok(None)` when `zones` is empty or no zone contains the point
pub fn resolve<'a>(point: &Coordinate, zones: &'a [Zone]) -> AppResult<Option<&'a Zone>> {
    point.validate()?;

    let mut best: Option<(&Zone, f64)> = None;

    for zone in zones {
        validate_zone(zone)?;

        let d = distance_meters(point, &zone.center);
        if d > zone.radius_meters {
            continue;
        }

        // strict `<` keeps the earlier zone on ties
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((zone, d)),
        }
    }

    Ok(best.map(|(zone, _)| zone))
}

/// Distance from `point` to every zone, in input order, flagged with
/// whether the zone contains the point.
pub fn rank<'a>(point: &Coordinate, zones: &'a [Zone]) -> AppResult<Vec<(&'a Zone, f64, bool)>> {
    point.validate()?;

    zones
        .iter()
        .map(|zone| {
            validate_zone(zone)?;
            let d = distance_meters(point, &zone.center);
            Ok((zone, d, d <= zone.radius_meters))
        })
        .collect()
}
