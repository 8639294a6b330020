pub mod geofence;
pub mod intervals;
pub mod totals;
