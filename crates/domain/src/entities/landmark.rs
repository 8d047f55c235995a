//! Landmark entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{Coordinates, GeoLocation};

/// Category of a point of interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandmarkKind {
    Monument,
    Park,
    Street,
    River,
    /// Personal place; its description is shown as-is, never looked up
    Custom,
}

/// A point of interest on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Unique identifier within the combined landmark and marker collection
    pub id: String,
    /// Display name, also used as the text-info lookup key
    pub name: String,
    /// Category
    #[serde(rename = "type")]
    pub kind: LandmarkKind,
    /// Position
    pub coordinates: Coordinates,
    /// Short description
    pub description: String,
    /// Marker colour (hex)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Marker symbol identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl Landmark {
    /// Real-world location of this landmark
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.coordinates.location()
    }

    /// Whether this is a personal place whose description is authoritative
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.kind == LandmarkKind::Custom
    }
}

/// A named district of the city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighborhood {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
