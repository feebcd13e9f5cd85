use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::geo;

pub mod blackspot;
pub mod route;

pub use blackspot::{Blackspot, BlackspotTable, BlackspotTableError};
pub use route::{RouteSetResponse, ScoredRoute};

/// A geographic point. Used for request endpoints, blackspot locations and
/// hazard markers alike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Great-circle distance to another point, in meters.
    pub fn distance_meters_to(&self, other: &Coordinate) -> f64 {
        geo::haversine_distance_meters(self.lat, self.lon, other.lat, other.lon)
    }
}
