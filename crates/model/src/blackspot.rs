use std::error;
use std::fmt;
use std::fs;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Coordinate;

pub const DEFAULT_BLACKSPOT_RADIUS_METERS: f64 = 250.0;

/// A known accident-prone location.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Blackspot {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Blackspot {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Read-only table of blackspots plus the radius within which a route step
/// counts as passing one. Loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlackspotTable {
    #[serde(default = "default_radius_meters")]
    pub radius_meters: f64,
    pub blackspots: Vec<Blackspot>,
}

fn default_radius_meters() -> f64 {
    DEFAULT_BLACKSPOT_RADIUS_METERS
}

impl BlackspotTable {
    /// The compiled-in table, used when no external table is configured.
    pub fn builtin() -> Self {
        Self {
            radius_meters: DEFAULT_BLACKSPOT_RADIUS_METERS,
            blackspots: vec![
                Blackspot::new("Gandhipuram Signal", 11.0180, 76.9691),
                Blackspot::new("Ukkadam", 10.9946, 76.9644),
                Blackspot::new("Avinashi Road - Hope College", 11.0268, 77.0357),
                Blackspot::new("Mettupalayam Road - Saibaba Colony", 11.0292, 76.9456),
                Blackspot::new("Trichy Road - Ramanathapuram", 11.0028, 76.9947),
                Blackspot::new("Saravanampatti Junction", 11.0705, 76.9981),
                Blackspot::new("Pollachi Road - Eachanari", 10.9415, 76.9695),
                Blackspot::new("Palakkad Road - Kuniyamuthur", 10.9701, 76.9410),
            ],
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BlackspotTableError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn len(&self) -> usize {
        self.blackspots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blackspots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Blackspot> {
        self.blackspots.iter()
    }
}

#[derive(Debug)]
pub enum BlackspotTableError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl error::Error for BlackspotTableError {}

impl fmt::Display for BlackspotTableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BlackspotTableError::Io(e) => write!(f, "could not read blackspot table: {}", e),
            BlackspotTableError::Json(e) => write!(f, "invalid blackspot table: {}", e),
        }
    }
}

impl From<std::io::Error> for BlackspotTableError {
    fn from(e: std::io::Error) -> Self {
        BlackspotTableError::Io(e)
    }
}

impl From<serde_json::Error> for BlackspotTableError {
    fn from(e: serde_json::Error) -> Self {
        BlackspotTableError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_populated() {
        let table = BlackspotTable::builtin();
        assert_eq!(table.len(), 8);
        assert_eq!(table.radius_meters, DEFAULT_BLACKSPOT_RADIUS_METERS);
        assert!(table.iter().any(|spot| spot.name == "Ukkadam"));
    }

    #[test]
    fn table_parses_from_json_with_default_radius() {
        let table: BlackspotTable = serde_json::from_str(
            r#"{"blackspots": [{"name": "Test Junction", "lat": 11.0, "lon": 76.9}]}"#,
        )
        .expect("table should parse");
        assert_eq!(table.len(), 1);
        assert_eq!(table.radius_meters, DEFAULT_BLACKSPOT_RADIUS_METERS);
    }

    #[test]
    fn table_parses_explicit_radius() {
        let table: BlackspotTable = serde_json::from_str(
            r#"{"radiusMeters": 500.0, "blackspots": []}"#,
        )
        .expect("table should parse");
        assert_eq!(table.radius_meters, 500.0);
        assert!(table.is_empty());
    }

    #[test]
    fn missing_file_reports_io_error() {
        let result = BlackspotTable::from_file("/nonexistent/blackspots.json");
        assert!(matches!(result, Err(BlackspotTableError::Io(_))));
    }
}
