//! Application layer - Use cases and orchestration
//!
//! Contains the port definitions for routing, place information, marker
//! storage and geolocation, plus the services built on them: travel
//! estimation, the marker store and the map interaction state machine.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
