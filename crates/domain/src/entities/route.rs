//! Route estimates

use serde::{Deserialize, Serialize};

use crate::value_objects::TravelMode;

/// Path of a route as a GeoJSON `LineString`
///
/// Positions are `[longitude, latitude]` pairs, as GeoJSON mandates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "LineString")]
pub struct RouteGeometry {
    pub coordinates: Vec<[f64; 2]>,
}

impl RouteGeometry {
    #[must_use]
    pub const fn new(coordinates: Vec<[f64; 2]>) -> Self {
        Self { coordinates }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// One mode's travel estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    /// Distance in kilometers, rounded to one decimal
    pub distance_km: f64,
    /// Duration in whole minutes
    pub duration_minutes: u32,
    /// Path to draw; absent when no route was found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<RouteGeometry>,
    /// Transit line identifiers, in suggested order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<String>>,
}

impl RouteInfo {
    /// The zero-route sentinel returned when routing fails
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            distance_km: 0.0,
            duration_minutes: 0,
            geometry: None,
            lines: None,
        }
    }

    /// Build an estimate from raw provider measurements
    ///
    /// Meters become kilometers rounded to one decimal, seconds become
    /// minutes rounded to the nearest integer.
    #[must_use]
    pub fn from_measurements(
        distance_m: f64,
        duration_s: f64,
        geometry: Option<RouteGeometry>,
    ) -> Self {
        Self {
            distance_km: (distance_m.max(0.0) / 100.0).round() / 10.0,
            duration_minutes: round_minutes(duration_s.max(0.0) / 60.0),
            geometry,
            lines: None,
        }
    }

    /// Whether this is the sentinel
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.distance_km == 0.0 && self.duration_minutes == 0 && self.geometry.is_none()
    }

    /// Same path and distance with the duration scaled and lines attached
    #[must_use]
    pub fn scaled(&self, duration_factor: f64, lines: Option<Vec<String>>) -> Self {
        Self {
            distance_km: self.distance_km,
            duration_minutes: round_minutes(f64::from(self.duration_minutes) * duration_factor),
            geometry: self.geometry.clone(),
            lines,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_minutes(minutes: f64) -> u32 {
    minutes.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

/// Estimates for every travel mode, always fully populated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelModes {
    pub car: RouteInfo,
    pub train: RouteInfo,
    pub bus: RouteInfo,
}

impl TravelModes {
    /// Estimate for one mode
    #[must_use]
    pub const fn get(&self, mode: TravelMode) -> &RouteInfo {
        match mode {
            TravelMode::Car => &self.car,
            TravelMode::Train => &self.train,
            TravelMode::Bus => &self.bus,
        }
    }
}
