//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer on top of the
//! OSRM and Gemini integrations, a JSON file for user markers, and the
//! configuration and logging setup shared by the binaries.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, GeoLocationConfig, LogFormat, LoggingConfig, StorageConfig};
pub use persistence::JsonFileMarkerStorage;
pub use telemetry::{TelemetryError, init_logging};
