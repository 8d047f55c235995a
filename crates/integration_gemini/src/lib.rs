//! Gemini integration for CityMap
//!
//! Asks the Gemini `generateContent` endpoint to describe a place, with the
//! Google Maps grounding tool enabled and retrieval biased towards the city
//! centre. The answer text comes back together with the Maps pages the model
//! grounded it on.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_gemini::{GeminiClient, GeminiConfig, PlaceDescriber};
//!
//! let config = GeminiConfig {
//!     api_key: Some(std::env::var("GEMINI_API_KEY")?),
//!     ..GeminiConfig::default()
//! };
//! let client = GeminiClient::new(&config)?;
//! let answer = client.describe_place("Parc d'Ibirapuera").await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeminiClient, PlaceDescriber};
pub use config::GeminiConfig;
pub use error::GeminiError;
pub use models::{GroundedAnswer, MapsSource};
