//! Grounded place information port

use async_trait::async_trait;
use domain::entities::PlaceInfo;
#[cfg(test)]
use mockall::automock;

/// Port for looking up descriptive text about a place
///
/// Implementations return the load-failed placeholder instead of an error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlaceInfoPort: Send + Sync {
    /// Describe the place with the given display name
    async fn lookup(&self, place_name: &str) -> PlaceInfo;
}
