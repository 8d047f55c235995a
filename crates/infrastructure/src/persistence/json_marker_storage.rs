//! JSON file storage for custom markers
//!
//! All markers live in one file holding a JSON array of landmark records
//! (`type` is always `custom`). Each save rewrites the whole file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::MarkerStoragePort;
use async_trait::async_trait;
use domain::entities::CustomMarker;
use tracing::{debug, instrument};

/// Marker storage backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileMarkerStorage {
    path: PathBuf,
}

impl JsonFileMarkerStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn storage_error(context: &str, path: &Path, e: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::Storage(format!("{context} {}: {e}", path.display()))
}

#[async_trait]
impl MarkerStoragePort for JsonFileMarkerStorage {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Vec<CustomMarker>, ApplicationError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No marker file yet");
                return Ok(Vec::new());
            },
            Err(e) => return Err(storage_error("Failed to read", &self.path, e)),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let markers: Vec<CustomMarker> = serde_json::from_str(&raw)
            .map_err(|e| storage_error("Malformed marker file", &self.path, e))?;
        debug!(count = markers.len(), "Markers loaded");
        Ok(markers)
    }

    #[instrument(skip(self, markers), fields(path = %self.path.display(), count = markers.len()))]
    async fn save(&self, markers: &[CustomMarker]) -> Result<(), ApplicationError> {
        let json = serde_json::to_string_pretty(markers)
            .map_err(|e| storage_error("Failed to encode markers for", &self.path, e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error("Failed to create directory for", &self.path, e))?;
        }

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| storage_error("Failed to write", &self.path, e))?;
        debug!("Markers saved");
        Ok(())
    }
}
