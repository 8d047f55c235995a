//! Landmark coordinates

use serde::{Deserialize, Serialize};

use super::GeoLocation;

/// Position on the hand-drawn illustrated map
///
/// Purely a projection for the illustrated view; has no geodesic meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IllustratedPoint {
    pub x: f64,
    pub y: f64,
}

/// Where a landmark sits: a real-world location plus an optional
/// illustrated-map position
///
/// Serialized flat, as `{ "lat", "lng", "x"?, "y"? }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(flatten)]
    location: GeoLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y: Option<f64>,
}

impl Coordinates {
    /// Coordinates without an illustrated-map position
    #[must_use]
    pub const fn new(location: GeoLocation) -> Self {
        Self {
            location,
            x: None,
            y: None,
        }
    }

    /// Attach an illustrated-map position
    #[must_use]
    pub const fn with_illustrated(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Real-world location, the only thing routing and the real map use
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// Illustrated-map position, when both axes are known
    #[must_use]
    pub fn illustrated(&self) -> Option<IllustratedPoint> {
        Some(IllustratedPoint {
            x: self.x?,
            y: self.y?,
        })
    }
}

impl From<GeoLocation> for Coordinates {
    fn from(location: GeoLocation) -> Self {
        Self::new(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_flat_without_projection() {
        let coords = Coordinates::new(GeoLocation::new_unchecked(1.0, 1.0));
        let json = serde_json::to_string(&coords).unwrap();
        assert_eq!(json, r#"{"lat":1.0,"lng":1.0}"#);
    }

    #[test]
    fn round_trips_with_projection() {
        let json = r#"{"lat":-23.5614,"lng":-46.6559,"x":380.0,"y":500.0}"#;
        let coords: Coordinates = serde_json::from_str(json).unwrap();
        assert_eq!(
            coords.illustrated(),
            Some(IllustratedPoint { x: 380.0, y: 500.0 })
        );
        assert!((coords.location().latitude() - -23.5614).abs() < f64::EPSILON);
        assert_eq!(serde_json::to_string(&coords).unwrap(), json);
    }

    #[test]
    fn partial_projection_is_not_exposed() {
        let json = r#"{"lat":0.0,"lng":0.0,"x":12.0}"#;
        let coords: Coordinates = serde_json::from_str(json).unwrap();
        assert!(coords.illustrated().is_none());
    }
}
