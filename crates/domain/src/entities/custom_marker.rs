//! User-created marker entity

use serde::{Deserialize, Serialize};

use super::{Landmark, LandmarkKind};
use crate::errors::DomainError;
use crate::value_objects::{Coordinates, GeoLocation};

/// A point of interest created by the user
///
/// Stored with the same record shape as a [`Landmark`] of kind `custom`, but
/// colour and symbol are mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Landmark", try_from = "Landmark")]
pub struct CustomMarker {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
    pub description: String,
    pub color: String,
    pub symbol: String,
}

impl CustomMarker {
    /// Real-world location of this marker
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.coordinates.location()
    }
}

impl From<CustomMarker> for Landmark {
    fn from(marker: CustomMarker) -> Self {
        Self {
            id: marker.id,
            name: marker.name,
            kind: LandmarkKind::Custom,
            coordinates: marker.coordinates,
            description: marker.description,
            color: Some(marker.color),
            symbol: Some(marker.symbol),
        }
    }
}

impl TryFrom<Landmark> for CustomMarker {
    type Error = DomainError;

    fn try_from(landmark: Landmark) -> Result<Self, Self::Error> {
        if landmark.kind != LandmarkKind::Custom {
            return Err(DomainError::ValidationError(format!(
                "marker {} is not of kind custom",
                landmark.id
            )));
        }
        let (Some(color), Some(symbol)) = (landmark.color, landmark.symbol) else {
            return Err(DomainError::ValidationError(format!(
                "marker {} is missing its colour or symbol",
                landmark.id
            )));
        };
        Ok(Self {
            id: landmark.id,
            name: landmark.name,
            coordinates: landmark.coordinates,
            description: landmark.description,
            color,
            symbol,
        })
    }
}
