//! OSRM data models

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(latitude, longitude)` pair in degrees
pub type LatLon = (f64, f64);

/// Routing profile path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsrmProfile {
    Car,
    Foot,
    Bike,
}

impl OsrmProfile {
    /// Segment used in `/route/v1/{profile}/...`
    #[must_use]
    pub const fn as_path(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Foot => "foot",
            Self::Bike => "bike",
        }
    }
}

impl fmt::Display for OsrmProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// The first route of an OSRM answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsrmRoute {
    /// Length in meters
    pub distance_m: f64,
    /// Travel time in seconds
    pub duration_s: f64,
    /// GeoJSON line coordinates as `[longitude, latitude]`
    pub geometry: Vec<[f64; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_path() {
        assert_eq!(OsrmProfile::Car.as_path(), "car");
        assert_eq!(OsrmProfile::Foot.to_string(), "foot");
        assert_eq!(OsrmProfile::Bike.to_string(), "bike");
    }

    #[test]
    fn test_profile_serde() {
        let json = serde_json::to_string(&OsrmProfile::Bike).unwrap();
        assert_eq!(json, r#""bike""#);
    }
}
