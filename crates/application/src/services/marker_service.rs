//! User marker collection with write-through persistence
//!
//! The store owns the in-memory collection and rewrites the whole storage
//! slot after every mutation. Storage failures are logged and never
//! interrupt the session.

use std::sync::Arc;

use chrono::Utc;
use domain::entities::CustomMarker;
use domain::value_objects::{Coordinates, GeoLocation};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::ports::MarkerStoragePort;

/// Prefix shared by every user marker id
pub const MARKER_ID_PREFIX: &str = "custom-";

/// Input for creating a marker
#[derive(Debug, Clone, PartialEq)]
pub struct NewMarker {
    pub title: String,
    pub description: String,
    pub color: String,
    pub symbol: String,
    /// Where the marker goes; `None` while the user has not tapped the map
    pub coordinates: Option<GeoLocation>,
}

/// CRUD over user-created markers
pub struct MarkerStore {
    storage: Arc<dyn MarkerStoragePort>,
    markers: Vec<CustomMarker>,
}

impl std::fmt::Debug for MarkerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkerStore")
            .field("markers", &self.markers.len())
            .finish_non_exhaustive()
    }
}

impl MarkerStore {
    /// Load the persisted collection
    ///
    /// Unreadable storage degrades to an empty collection.
    #[instrument(skip(storage))]
    pub async fn load(storage: Arc<dyn MarkerStoragePort>) -> Self {
        let markers = match storage.load().await {
            Ok(markers) => {
                info!(count = markers.len(), "Loaded custom markers");
                markers
            },
            Err(e) => {
                warn!(error = %e, "Stored markers unreadable, starting empty");
                Vec::new()
            },
        };
        Self { storage, markers }
    }

    /// All markers in creation order
    pub fn markers(&self) -> &[CustomMarker] {
        &self.markers
    }

    /// Look up a marker by id
    pub fn get(&self, id: &str) -> Option<&CustomMarker> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// Create and persist a marker
    ///
    /// Returns `None` without touching storage when the title is blank or no
    /// coordinates were picked.
    #[instrument(skip(self, marker), fields(title = %marker.title))]
    pub async fn add(&mut self, marker: NewMarker) -> Option<CustomMarker> {
        let title = marker.title.trim();
        let Some(location) = marker.coordinates else {
            debug!("Ignoring marker without coordinates");
            return None;
        };
        if title.is_empty() {
            debug!("Ignoring marker without title");
            return None;
        }

        let created = CustomMarker {
            id: self.next_id(),
            name: title.to_string(),
            coordinates: Coordinates::new(location),
            description: marker.description,
            color: marker.color,
            symbol: marker.symbol,
        };
        self.markers.push(created.clone());
        self.persist().await;

        info!(id = %created.id, "Added custom marker");
        Some(created)
    }

    /// Remove a marker by id
    ///
    /// Returns whether a marker was removed. Nothing is written when the id
    /// is unknown.
    #[instrument(skip(self))]
    pub async fn remove(&mut self, id: &str) -> bool {
        let before = self.markers.len();
        self.markers.retain(|m| m.id != id);
        if self.markers.len() == before {
            debug!("No marker to remove");
            return false;
        }

        self.persist().await;
        info!("Removed custom marker");
        true
    }

    async fn persist(&self) {
        if let Err(e) = self.storage.save(&self.markers).await {
            error!(error = %e, count = self.markers.len(), "Failed to persist custom markers");
        }
    }

    fn next_id(&self) -> String {
        let id = format!("{MARKER_ID_PREFIX}{}", Utc::now().timestamp_millis());
        if self.get(&id).is_none() {
            return id;
        }
        let suffix = Uuid::new_v4().simple().to_string();
        format!("{id}-{}", &suffix[..6])
    }
}
