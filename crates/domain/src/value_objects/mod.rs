//! Value Objects - Immutable, identity-less domain primitives

mod coordinates;
mod geo_location;
mod map_style;
mod travel_mode;

pub use coordinates::{Coordinates, IllustratedPoint};
pub use geo_location::GeoLocation;
pub use map_style::MapStyle;
pub use travel_mode::{RouteProfile, TravelMode};
