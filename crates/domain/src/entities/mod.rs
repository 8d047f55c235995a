//! Domain entities - Objects with identity and lifecycle

mod custom_marker;
mod landmark;
mod place_info;
mod route;

pub use custom_marker::CustomMarker;
pub use landmark::{Landmark, LandmarkKind, Neighborhood};
pub use place_info::{PlaceInfo, PlaceLink};
pub use route::{RouteGeometry, RouteInfo, TravelModes};
