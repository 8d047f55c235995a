//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geolocation_port;
mod marker_storage_port;
mod place_info_port;
mod routing_port;

#[cfg(test)]
pub use geolocation_port::MockGeolocationPort;
pub use geolocation_port::GeolocationPort;
#[cfg(test)]
pub use marker_storage_port::MockMarkerStoragePort;
pub use marker_storage_port::MarkerStoragePort;
#[cfg(test)]
pub use place_info_port::MockPlaceInfoPort;
pub use place_info_port::PlaceInfoPort;
#[cfg(test)]
pub use routing_port::MockRoutingPort;
pub use routing_port::RoutingPort;
