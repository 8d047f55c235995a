//! Routing adapter - Implements RoutingPort using integration_osrm

use application::error::ApplicationError;
use application::ports::RoutingPort;
use async_trait::async_trait;
use domain::entities::{RouteGeometry, RouteInfo};
use domain::value_objects::{GeoLocation, RouteProfile};
use integration_osrm::{OsrmClient, OsrmConfig, OsrmProfile, OsrmRoute, RoutingClient};
use tracing::{debug, instrument, warn};

/// Adapter for the OSRM routing service
///
/// Every failure collapses into [`RouteInfo::unavailable`]; callers never
/// see an error from this adapter.
pub struct OsrmRoutingAdapter {
    client: Box<dyn RoutingClient>,
}

impl std::fmt::Debug for OsrmRoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsrmRoutingAdapter")
            .field("client", &"RoutingClient")
            .finish()
    }
}

impl OsrmRoutingAdapter {
    /// Wrap an existing routing client
    pub fn new(client: impl RoutingClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Build the adapter with an HTTP client for the given configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the OSRM settings are invalid or the
    /// HTTP client cannot be created.
    pub fn from_config(config: &OsrmConfig) -> Result<Self, ApplicationError> {
        let client = OsrmClient::new(config)
            .map_err(|e| ApplicationError::Configuration(format!("OSRM client: {e}")))?;
        Ok(Self::new(client))
    }
}

const fn to_osrm_profile(profile: RouteProfile) -> OsrmProfile {
    match profile {
        RouteProfile::Car => OsrmProfile::Car,
        RouteProfile::Foot => OsrmProfile::Foot,
        RouteProfile::Bike => OsrmProfile::Bike,
    }
}

fn to_route_info(route: OsrmRoute) -> RouteInfo {
    let geometry = (!route.geometry.is_empty()).then(|| RouteGeometry::new(route.geometry));
    RouteInfo::from_measurements(route.distance_m, route.duration_s, geometry)
}

#[async_trait]
impl RoutingPort for OsrmRoutingAdapter {
    #[instrument(skip(self))]
    async fn fetch_route(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
        profile: RouteProfile,
    ) -> RouteInfo {
        let result = self
            .client
            .route(
                to_osrm_profile(profile),
                (origin.latitude(), origin.longitude()),
                (destination.latitude(), destination.longitude()),
            )
            .await;

        match result {
            Ok(route) => {
                let info = to_route_info(route);
                debug!(
                    distance_km = info.distance_km,
                    duration_minutes = info.duration_minutes,
                    "Route found"
                );
                info
            },
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), "Routing failed, using no-route estimate");
                RouteInfo::unavailable()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use integration_osrm::OsrmError;

    use super::*;

    struct FixedClient(Result<OsrmRoute, ()>);

    #[async_trait]
    impl RoutingClient for FixedClient {
        async fn route(
            &self,
            _profile: OsrmProfile,
            _origin: (f64, f64),
            _destination: (f64, f64),
        ) -> Result<OsrmRoute, OsrmError> {
            self.0.clone().map_err(|()| OsrmError::NoRoute {
                code: "NoRoute".to_string(),
            })
        }
    }

    fn here() -> GeoLocation {
        GeoLocation::new_unchecked(-23.5934, -46.7265)
    }

    fn there() -> GeoLocation {
        GeoLocation::new_unchecked(-23.5614, -46.6559)
    }

    #[tokio::test]
    async fn converts_measurements() {
        let adapter = OsrmRoutingAdapter::new(FixedClient(Ok(OsrmRoute {
            distance_m: 12_345.0,
            duration_s: 1_500.0,
            geometry: vec![[-46.7265, -23.5934], [-46.6559, -23.5614]],
        })));

        let info = adapter
            .fetch_route(&here(), &there(), RouteProfile::Car)
            .await;

        assert!((info.distance_km - 12.3).abs() < f64::EPSILON);
        assert_eq!(info.duration_minutes, 25);
        assert_eq!(info.geometry.map(|g| g.len()), Some(2));
        assert!(info.lines.is_none());
    }

    #[tokio::test]
    async fn empty_geometry_is_dropped() {
        let adapter = OsrmRoutingAdapter::new(FixedClient(Ok(OsrmRoute {
            distance_m: 900.0,
            duration_s: 100.0,
            geometry: Vec::new(),
        })));

        let info = adapter
            .fetch_route(&here(), &there(), RouteProfile::Foot)
            .await;

        assert!(info.geometry.is_none());
        assert_eq!(info.duration_minutes, 2);
    }

    #[tokio::test]
    async fn failure_becomes_sentinel() {
        let adapter = OsrmRoutingAdapter::new(FixedClient(Err(())));

        let info = adapter
            .fetch_route(&here(), &there(), RouteProfile::Car)
            .await;

        assert_eq!(info, RouteInfo::unavailable());
    }

    #[test]
    fn profile_mapping() {
        assert_eq!(to_osrm_profile(RouteProfile::Car), OsrmProfile::Car);
        assert_eq!(to_osrm_profile(RouteProfile::Foot), OsrmProfile::Foot);
        assert_eq!(to_osrm_profile(RouteProfile::Bike), OsrmProfile::Bike);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = OsrmConfig {
            base_url: "ftp://example.com".to_string(),
            ..OsrmConfig::default()
        };
        assert!(matches!(
            OsrmRoutingAdapter::from_config(&config),
            Err(ApplicationError::Configuration(_))
        ));
    }
}
