//! Geolocation from configuration
//!
//! A terminal has no device position, so the "current" position is the one
//! the user configured or passed on the command line.

use application::error::ApplicationError;
use application::ports::GeolocationPort;
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use tracing::debug;

/// Geolocation port answering with a fixed position, if any
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredGeolocation {
    position: Option<GeoLocation>,
}

impl ConfiguredGeolocation {
    #[must_use]
    pub const fn new(position: Option<GeoLocation>) -> Self {
        Self { position }
    }

    #[must_use]
    pub const fn position(&self) -> Option<GeoLocation> {
        self.position
    }
}

#[async_trait]
impl GeolocationPort for ConfiguredGeolocation {
    async fn current_position(&self) -> Result<GeoLocation, ApplicationError> {
        match self.position {
            Some(position) => {
                debug!(%position, "Using configured position");
                Ok(position)
            },
            None => Err(ApplicationError::ExternalService(
                "No position configured".to_string(),
            )),
        }
    }
}
