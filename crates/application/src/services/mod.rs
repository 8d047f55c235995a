//! Application services - Use case implementations

pub mod location_helper;
mod map_controller;
mod map_state;
mod marker_service;
mod travel_estimation;

pub use map_controller::{Completion, MapCommand, MapController, MapHandle, SelectionTicket};
pub use map_state::{AddMode, MapState, MarkerDraft, Notice, SelectedPlace};
pub use marker_service::{MARKER_ID_PREFIX, MarkerStore, NewMarker};
pub use travel_estimation::{
    BUS_DURATION_FACTOR, TRAIN_DURATION_FACTOR, TravelEstimator, derive_travel_modes,
};
