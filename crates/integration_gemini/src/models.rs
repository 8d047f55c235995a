//! Gemini data models

use serde::{Deserialize, Serialize};

/// A Google Maps page the answer was grounded on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapsSource {
    pub uri: String,
    pub title: Option<String>,
}

/// Model answer about a place
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundedAnswer {
    /// Answer text; `None` when the model returned no text part
    pub text: Option<String>,
    /// Maps grounding sources, in the order given
    pub sources: Vec<MapsSource>,
}
