//! Persistence layer

mod json_marker_storage;

pub use json_marker_storage::JsonFileMarkerStorage;
