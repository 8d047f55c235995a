//! OSRM HTTP client
//!
//! Issues `GET {base}/route/v1/{profile}/{lon1},{lat1};{lon2},{lat2}` with
//! full overview and GeoJSON geometry, and keeps the first route.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::OsrmConfig;
use crate::error::OsrmError;
use crate::models::{LatLon, OsrmProfile, OsrmRoute};

/// OSRM status code of a successful answer
const CODE_OK: &str = "Ok";

/// Trait for routing service clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Fetch the best route between two points
    async fn route(
        &self,
        profile: OsrmProfile,
        origin: LatLon,
        destination: LatLon,
    ) -> Result<OsrmRoute, OsrmError>;
}

/// Client for an OSRM server
#[derive(Debug)]
pub struct OsrmClient {
    client: Client,
    config: OsrmConfig,
}

impl OsrmClient {
    /// Create a new OSRM client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &OsrmConfig) -> Result<Self, OsrmError> {
        config.validate().map_err(OsrmError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("CityMap/0.2")
            .build()
            .map_err(|e| OsrmError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build the route URL; OSRM wants longitude first
    fn route_url(&self, profile: OsrmProfile, origin: LatLon, destination: LatLon) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.config.base(),
            profile.as_path(),
            origin.1,
            origin.0,
            destination.1,
            destination.0
        )
    }

    /// Parse a raw OSRM answer into its first route
    fn parse_route_response(body: &str) -> Result<OsrmRoute, OsrmError> {
        let raw: RawRouteResponse =
            serde_json::from_str(body).map_err(|e| OsrmError::ParseError(e.to_string()))?;

        if raw.code != CODE_OK {
            if let Some(message) = &raw.message {
                debug!(code = %raw.code, %message, "OSRM refused the query");
            }
            return Err(OsrmError::NoRoute { code: raw.code });
        }

        let Some(first) = raw.routes.into_iter().next() else {
            return Err(OsrmError::NoRoute { code: raw.code });
        };

        Ok(OsrmRoute {
            distance_m: first.distance,
            duration_s: first.duration,
            geometry: first.geometry.map(|g| g.coordinates).unwrap_or_default(),
        })
    }
}

#[async_trait]
impl RoutingClient for OsrmClient {
    #[instrument(skip(self))]
    async fn route(
        &self,
        profile: OsrmProfile,
        origin: LatLon,
        destination: LatLon,
    ) -> Result<OsrmRoute, OsrmError> {
        let url = self.route_url(profile, origin, destination);
        let params = [("overview", "full"), ("geometries", "geojson")];

        debug!(?url, "Requesting route");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OsrmError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    OsrmError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(OsrmError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| OsrmError::ParseError(e.to_string()))?;

        if !status.is_success() {
            // OSRM reports NoRoute and InvalidQuery as 400 with a JSON body
            return match Self::parse_route_response(&body) {
                Err(err @ OsrmError::NoRoute { .. }) => Err(err),
                _ => {
                    warn!(%status, "Routing request failed");
                    Err(OsrmError::RequestFailed(format!("HTTP {status}")))
                },
            };
        }

        let route = Self::parse_route_response(&body)?;
        debug!(
            distance_m = route.distance_m,
            duration_s = route.duration_s,
            points = route.geometry.len(),
            "Route found"
        );
        Ok(route)
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawRouteResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    distance: f64,
    duration: f64,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    coordinates: Vec<[f64; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_url_puts_longitude_first() {
        let client = OsrmClient::new(&OsrmConfig::for_testing()).unwrap();
        let url = client.route_url(OsrmProfile::Car, (-23.5934, -46.7265), (-23.5614, -46.6559));
        assert_eq!(
            url,
            "https://router.project-osrm.org/route/v1/car/-46.7265,-23.5934;-46.6559,-23.5614"
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = OsrmConfig {
            timeout_secs: 0,
            ..OsrmConfig::default()
        };
        assert!(matches!(
            OsrmClient::new(&config),
            Err(OsrmError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_parse_ok_response() {
        let body = r#"{
            "code": "Ok",
            "routes": [{
                "distance": 12345.6,
                "duration": 2400.0,
                "geometry": { "type": "LineString", "coordinates": [[-46.72, -23.59], [-46.65, -23.56]] }
            }]
        }"#;
        let route = OsrmClient::parse_route_response(body).unwrap();
        assert!((route.distance_m - 12345.6).abs() < f64::EPSILON);
        assert!((route.duration_s - 2400.0).abs() < f64::EPSILON);
        assert_eq!(route.geometry.len(), 2);
    }

    #[test]
    fn test_parse_keeps_first_route() {
        let body = r#"{
            "code": "Ok",
            "routes": [
                { "distance": 100.0, "duration": 60.0 },
                { "distance": 200.0, "duration": 90.0 }
            ]
        }"#;
        let route = OsrmClient::parse_route_response(body).unwrap();
        assert!((route.distance_m - 100.0).abs() < f64::EPSILON);
        assert!(route.geometry.is_empty());
    }

    #[test]
    fn test_parse_no_route_code() {
        let body = r#"{ "code": "NoRoute", "message": "Impossible route between points" }"#;
        let err = OsrmClient::parse_route_response(body).unwrap_err();
        assert!(matches!(err, OsrmError::NoRoute { code } if code == "NoRoute"));
    }

    #[test]
    fn test_parse_ok_without_routes() {
        let body = r#"{ "code": "Ok", "routes": [] }"#;
        let err = OsrmClient::parse_route_response(body).unwrap_err();
        assert!(matches!(err, OsrmError::NoRoute { .. }));
    }

    #[test]
    fn test_parse_garbage() {
        let err = OsrmClient::parse_route_response("<html>").unwrap_err();
        assert!(matches!(err, OsrmError::ParseError(_)));
    }
}
