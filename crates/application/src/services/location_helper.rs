//! Location helper utilities
//!
//! Pure functions for generating external Google Maps links.

use domain::value_objects::{GeoLocation, TravelMode};
use url::form_urlencoded;

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/?api=1";

/// Generate a directions deep link between two points
///
/// Car maps to `driving`, train and bus both map to `transit`.
#[must_use]
pub fn directions_link(origin: &GeoLocation, destination: &GeoLocation, mode: TravelMode) -> String {
    format!(
        "{DIRECTIONS_BASE}&origin={}&destination={}&travelmode={}",
        origin.to_query_pair(),
        destination.to_query_pair(),
        mode.navigation_mode()
    )
}

/// Generate a Google Maps search link from a free-form place name
#[must_use]
pub fn generate_maps_link(place: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(place.as_bytes()).collect();
    format!("https://maps.google.com/maps?q={encoded}")
}

/// Generate a Google Maps link from coordinates
#[must_use]
pub fn generate_maps_link_coords(location: &GeoLocation) -> String {
    format!("https://maps.google.com/maps?q={}", location.to_query_pair())
}
