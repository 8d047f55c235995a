//! Port implementations backed by external services

mod configured_geolocation;
mod gemini_place_info_adapter;
mod osrm_routing_adapter;

pub use configured_geolocation::ConfiguredGeolocation;
pub use gemini_place_info_adapter::GeminiPlaceInfoAdapter;
pub use osrm_routing_adapter::OsrmRoutingAdapter;
