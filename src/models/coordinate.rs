use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// A WGS84 point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> AppResult<Self> {
        let c = Self {
            latitude,
            longitude,
        };
        c.validate()?;
        Ok(c)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(AppError::InvalidCoordinate(format!(
                "non-finite value ({}, {})",
                self.latitude, self.longitude
            )));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(AppError::InvalidCoordinate(format!(
                "latitude {} out of range [-90, 90]",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(AppError::InvalidCoordinate(format!(
                "longitude {} out of range [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }

    /// Parse a pair of CLI strings (`--lat`, `--lon`).
    pub fn parse(lat: &str, lon: &str) -> AppResult<Self> {
        let latitude = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| AppError::InvalidCoordinate(format!("invalid latitude '{lat}'")))?;
        let longitude = lon
            .trim()
            .parse::<f64>()
            .map_err(|_| AppError::InvalidCoordinate(format!("invalid longitude '{lon}'")))?;
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
