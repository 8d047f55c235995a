//! Descriptive text for a point of interest

use serde::{Deserialize, Serialize};

/// A reference link returned alongside grounded text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceLink {
    pub uri: String,
    pub title: String,
}

/// Free text about a place plus its reference links
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaceInfo {
    pub text: String,
    #[serde(default)]
    pub links: Vec<PlaceLink>,
}

impl PlaceInfo {
    /// Shown when the provider answered without any text
    pub const NOT_AVAILABLE: &'static str = "Information non disponible pour le moment.";

    /// Shown when the provider could not be reached or failed
    pub const LOAD_FAILED: &'static str = "Erreur lors du chargement des données géographiques.";

    /// Title used for a map link the provider left untitled
    pub const DEFAULT_LINK_TITLE: &'static str = "Voir sur Google Maps";

    /// Text taken verbatim from a stored description, no links
    #[must_use]
    pub fn from_description(description: impl Into<String>) -> Self {
        Self {
            text: description.into(),
            links: Vec::new(),
        }
    }

    /// The error placeholder
    #[must_use]
    pub fn load_failed() -> Self {
        Self::from_description(Self::LOAD_FAILED)
    }

    /// First reference link, the one offered as "open in maps"
    #[must_use]
    pub fn primary_link(&self) -> Option<&PlaceLink> {
        self.links.first()
    }
}

impl PlaceLink {
    /// Link with a fallback title when the provider gave none
    #[must_use]
    pub fn new(uri: impl Into<String>, title: Option<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| PlaceInfo::DEFAULT_LINK_TITLE.to_string()),
        }
    }
}
