use crate::core::calculator::geofence;
use crate::db::service::DataService;
use crate::errors::{AppError, AppResult};
use crate::models::coordinate::Coordinate;
use crate::models::zone::{Zone, ZoneId};

/// Raw zone form values, as typed by an administrator.
#[derive(Debug, Clone, Default)]
pub struct ZoneForm {
    pub name: String,
    pub address: String,
    pub latitude: String,
    pub longitude: String,
    pub radius: String,
}

impl ZoneForm {
    /// All fields required; numeric latitude/longitude in range; radius > 0.
    pub fn validate(&self) -> AppResult<Zone> {
        let required = [
            ("name", &self.name),
            ("address", &self.address),
            ("latitude", &self.latitude),
            ("longitude", &self.longitude),
            ("radius", &self.radius),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::MissingField(field));
            }
        }

        let center = Coordinate::parse(&self.latitude, &self.longitude)?;

        let radius = self
            .radius
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite() && *r > 0.0)
            .ok_or_else(|| {
                AppError::InvalidZone(format!(
                    "radius must be a positive number (got '{}')",
                    self.radius
                ))
            })?;

        Ok(Zone::new(
            0,
            self.name.trim(),
            self.address.trim(),
            center,
            radius,
        ))
    }
}

pub struct ZoneLogic;

impl ZoneLogic {
    pub fn add(svc: &mut dyn DataService, form: &ZoneForm) -> AppResult<Zone> {
        let zone = form.validate()?;
        let saved = svc.add_zone(&zone)?;

        svc.write_log(
            "zone_add",
            &saved.name,
            &format!(
                "Zone #{} at ({}) radius {} m",
                saved.id, saved.center, saved.radius_meters
            ),
        )?;

        Ok(saved)
    }

    pub fn delete(svc: &mut dyn DataService, id: ZoneId) -> AppResult<Zone> {
        let zone = svc.find_zone(id)?.ok_or(AppError::ZoneNotFound(id))?;
        svc.delete_zone(id)?;
        svc.write_log("zone_del", &zone.name, &format!("Deleted zone #{id}"))?;
        Ok(zone)
    }

    /// Resolve `point` and report the distance to every zone.
    pub fn locate(
        svc: &dyn DataService,
        point: &Coordinate,
    ) -> AppResult<(Option<Zone>, Vec<(Zone, f64, bool)>)> {
        let zones = svc.list_zones()?;
        let resolved = geofence::resolve(point, &zones)?.cloned();
        let ranked = geofence::rank(point, &zones)?
            .into_iter()
            .map(|(z, d, inside)| (z.clone(), d, inside))
            .collect();
        Ok((resolved, ranked))
    }
}
