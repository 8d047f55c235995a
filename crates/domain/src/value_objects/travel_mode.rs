//! Travel modes and routing profiles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The three ways a trip is presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// Driving; the base route itself
    #[default]
    Car,
    /// Metro and commuter rail estimate
    Train,
    /// Bus estimate
    Bus,
}

impl TravelMode {
    /// All modes in display order
    pub const ALL: [Self; 3] = [Self::Car, Self::Train, Self::Bus];

    /// Coarse mode understood by the external navigation deep link
    #[must_use]
    pub const fn navigation_mode(&self) -> &'static str {
        match self {
            Self::Car => "driving",
            Self::Train | Self::Bus => "transit",
        }
    }

    /// Colour of the route polyline drawn for this mode
    #[must_use]
    pub const fn route_color(&self) -> &'static str {
        match self {
            Self::Car => "#10b981",
            Self::Train => "#3b82f6",
            Self::Bus => "#f59e0b",
        }
    }

    /// Whether this mode carries transit line identifiers
    #[must_use]
    pub const fn is_transit(&self) -> bool {
        matches!(self, Self::Train | Self::Bus)
    }

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Train => "train",
            Self::Bus => "bus",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "car" | "driving" => Ok(Self::Car),
            "train" | "metro" => Ok(Self::Train),
            "bus" => Ok(Self::Bus),
            _ => Err(DomainError::InvalidTravelMode(s.to_string())),
        }
    }
}

/// Profile requested from the point-to-point routing provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteProfile {
    Car,
    Foot,
    Bike,
}

impl RouteProfile {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Foot => "foot",
            Self::Bike => "bike",
        }
    }
}

impl fmt::Display for RouteProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_car() {
        assert_eq!(TravelMode::default(), TravelMode::Car);
    }

    #[test]
    fn navigation_mode_is_coarse() {
        assert_eq!(TravelMode::Car.navigation_mode(), "driving");
        assert_eq!(TravelMode::Train.navigation_mode(), "transit");
        assert_eq!(TravelMode::Bus.navigation_mode(), "transit");
    }

    #[test]
    fn route_colors() {
        assert_eq!(TravelMode::Car.route_color(), "#10b981");
        assert_eq!(TravelMode::Train.route_color(), "#3b82f6");
        assert_eq!(TravelMode::Bus.route_color(), "#f59e0b");
    }

    #[test]
    fn parses_from_str() {
        assert_eq!("car".parse::<TravelMode>().unwrap(), TravelMode::Car);
        assert_eq!("TRAIN".parse::<TravelMode>().unwrap(), TravelMode::Train);
        assert_eq!("bus".parse::<TravelMode>().unwrap(), TravelMode::Bus);
        assert!("plane".parse::<TravelMode>().is_err());
    }

    #[test]
    fn transit_flag() {
        assert!(!TravelMode::Car.is_transit());
        assert!(TravelMode::Train.is_transit());
        assert!(TravelMode::Bus.is_transit());
    }

    #[test]
    fn profile_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RouteProfile::Bike).unwrap(),
            r#""bike""#
        );
        assert_eq!(RouteProfile::Foot.to_string(), "foot");
    }
}
