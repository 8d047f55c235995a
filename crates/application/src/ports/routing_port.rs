//! Point-to-point routing port
//!
//! Adapters in the infrastructure layer implement this port on top of a
//! routing engine. Provider failures never surface here: they come back as
//! [`RouteInfo::unavailable`].

use async_trait::async_trait;
use domain::entities::RouteInfo;
use domain::value_objects::{GeoLocation, RouteProfile};
#[cfg(test)]
use mockall::automock;

/// Port for fetching a single route between two points
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Fetch one route for the given profile
    ///
    /// Returns the zero-route sentinel when no route exists or the provider
    /// fails.
    async fn fetch_route(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
        profile: RouteProfile,
    ) -> RouteInfo;
}
