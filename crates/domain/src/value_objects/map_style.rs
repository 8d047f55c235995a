//! Base map style

use serde::{Deserialize, Serialize};

/// Tile style of the real map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    #[default]
    Standard,
    Satellite,
}

impl MapStyle {
    /// The other style
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Standard => Self::Satellite,
            Self::Satellite => Self::Standard,
        }
    }
}
