//! Domain layer for CityMap
//!
//! Contains the city dataset, landmark and marker entities, route value
//! objects, the transit knowledge table, and domain errors.
//! This layer has no I/O and defines the ubiquitous language.

pub mod city;
pub mod entities;
pub mod errors;
pub mod palette;
pub mod transit_knowledge;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use transit_knowledge::{TransitEntry, TransitKnowledge};
pub use value_objects::*;
