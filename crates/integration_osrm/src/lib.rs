//! OSRM routing integration for CityMap
//!
//! Provides point-to-point routes via the [OSRM](https://project-osrm.org)
//! `route/v1` HTTP API. The public demo server at
//! `router.project-osrm.org` is the default backend.
//!
//! # Architecture
//!
//! [`RoutingClient`] defines the interface, implemented by [`OsrmClient`].
//! The client returns typed errors; turning them into the application's
//! "no route" sentinel is left to the infrastructure adapter.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_osrm::{OsrmClient, OsrmConfig, OsrmProfile, RoutingClient};
//!
//! let client = OsrmClient::new(&OsrmConfig::default())?;
//! let route = client
//!     .route(OsrmProfile::Car, (-23.5934, -46.7265), (-23.5614, -46.6559))
//!     .await?;
//! println!("{} m in {} s", route.distance_m, route.duration_s);
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{OsrmClient, RoutingClient};
pub use config::OsrmConfig;
pub use error::OsrmError;
pub use models::{LatLon, OsrmProfile, OsrmRoute};
