//! Map interaction controller
//!
//! [`MapController`] owns the [`MapState`] and the [`MarkerStore`] and is the
//! only thing that mutates them. Lookups that take time (place text, routes,
//! the user position) run as spawned tasks and report back on a completion
//! channel. Each text or route request carries the [`SelectionTicket`] it was
//! issued for; a completion whose ticket is no longer current is dropped.
//!
//! [`MapController::spawn`] moves the controller onto a task and returns a
//! cloneable [`MapHandle`] that sends commands and observes snapshots.

use std::sync::Arc;

use domain::entities::{CustomMarker, Landmark, PlaceInfo, TravelModes};
use domain::value_objects::{GeoLocation, TravelMode};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use super::map_state::{AddMode, MapState, MarkerDraft, Notice, SelectedPlace};
use super::marker_service::MarkerStore;
use super::travel_estimation::TravelEstimator;
use crate::error::ApplicationError;
use crate::ports::{GeolocationPort, PlaceInfoPort};

/// Capacity of the command queue between handles and the controller
const COMMAND_BUFFER: usize = 32;

/// Identifies the selection and the request an async lookup was issued for
///
/// Every request gets its own ticket, so a lookup superseded by a newer one
/// for the same selection is still recognised as stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    generation: u64,
    request: u64,
    place_id: String,
}

/// Result of a spawned lookup
#[derive(Debug, Clone)]
pub enum Completion {
    Info {
        ticket: SelectionTicket,
        info: PlaceInfo,
    },
    Route {
        ticket: SelectionTicket,
        modes: TravelModes,
    },
    Location(Option<GeoLocation>),
}

/// Transitions a [`MapHandle`] can request
#[derive(Debug, Clone)]
pub enum MapCommand {
    SelectPlace(String),
    MapClicked(GeoLocation),
    Deselect,
    EnterAddMode,
    CancelAddMode,
    UpdateDraft(MarkerDraft),
    SaveMarker,
    RequestRoute,
    SwitchMode(TravelMode),
    DismissTravel,
    DeleteSelected,
    ToggleMapStyle,
    LocationUpdated(GeoLocation),
    DismissNotice,
}

/// Owner of the map state machine
pub struct MapController {
    state: MapState,
    store: MarkerStore,
    estimator: TravelEstimator,
    place_info: Arc<dyn PlaceInfoPort>,
    geolocation: Arc<dyn GeolocationPort>,
    generation: u64,
    requests: u64,
    pending_info: Option<SelectionTicket>,
    pending_route: Option<SelectionTicket>,
    locating: bool,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
}

impl std::fmt::Debug for MapController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapController")
            .field("generation", &self.generation)
            .field("selected", &self.state.selected_id())
            .field("locating", &self.locating)
            .finish_non_exhaustive()
    }
}

impl MapController {
    /// Create a controller over the city landmarks and a loaded marker store
    pub fn new(
        landmarks: Vec<Landmark>,
        store: MarkerStore,
        estimator: TravelEstimator,
        place_info: Arc<dyn PlaceInfoPort>,
        geolocation: Arc<dyn GeolocationPort>,
    ) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let state = MapState::new(landmarks, store.markers().to_vec());
        Self {
            state,
            store,
            estimator,
            place_info,
            geolocation,
            generation: 0,
            requests: 0,
            pending_info: None,
            pending_route: None,
            locating: false,
            completion_tx,
            completion_rx,
        }
    }

    /// Current state
    pub const fn state(&self) -> &MapState {
        &self.state
    }

    /// Select a landmark or user marker
    ///
    /// Clears travel data. Personal places show their stored description at
    /// once; other landmarks start a text lookup. Returns `false` for an
    /// unknown id.
    #[instrument(skip(self))]
    pub fn select_place(&mut self, id: &str) -> bool {
        let Some(place) = self.state.find_place(id) else {
            debug!("Unknown place id");
            return false;
        };

        self.bump_generation();
        self.clear_travel();

        if let Some(description) = place.local_description() {
            self.state.info = Some(PlaceInfo::from_description(description));
            self.state.info_loading = false;
        } else {
            let ticket = self.ticket_for(place.id());
            self.state.info = None;
            self.state.info_loading = true;
            self.pending_info = Some(ticket.clone());
            self.spawn_info_lookup(ticket, place.name().to_string());
        }

        self.state.selection = Some(place);
        true
    }

    /// Handle a click on the map surface
    ///
    /// In add mode the click picks the pending marker position, otherwise it
    /// deselects.
    pub fn map_clicked(&mut self, location: GeoLocation) {
        if self.state.add_mode.is_active() {
            self.state.add_mode = AddMode::Pending(location);
        } else {
            self.deselect();
        }
    }

    /// Clear the selection, its text and travel data
    pub fn deselect(&mut self) {
        self.bump_generation();
        self.state.selection = None;
        self.state.info = None;
        self.state.info_loading = false;
        self.clear_travel();
    }

    pub fn enter_add_mode(&mut self) {
        self.state.add_mode = AddMode::AwaitingTap;
    }

    /// Leave add mode, discarding any pending position
    pub fn cancel_add_mode(&mut self) {
        self.state.add_mode = AddMode::Off;
    }

    pub fn update_draft(&mut self, draft: MarkerDraft) {
        self.state.draft = draft;
    }

    /// Save the draft at the pending position
    ///
    /// Requires a pending position and a title. The new marker becomes the
    /// selection with its description as the shown text.
    #[instrument(skip(self))]
    pub async fn save_marker(&mut self) -> Option<CustomMarker> {
        let pending = self.state.add_mode.pending()?;
        let marker = self
            .store
            .add(self.state.draft.to_new_marker(Some(pending)))
            .await?;

        self.state.markers = self.store.markers().to_vec();
        self.bump_generation();
        self.clear_travel();
        self.state.info = Some(PlaceInfo::from_description(marker.description.clone()));
        self.state.info_loading = false;
        self.state.selection = Some(SelectedPlace::Marker(marker.clone()));
        self.state.add_mode = AddMode::Off;
        self.state.draft = MarkerDraft::default();
        Some(marker)
    }

    /// Compute travel estimates from the user to the selection
    ///
    /// Without a known user position this raises a notice, asks for the
    /// position and computes nothing. Returns whether a computation started.
    #[instrument(skip(self))]
    pub fn request_route(&mut self) -> bool {
        let Some(place) = self.state.selection.clone() else {
            debug!("Route requested without a selection");
            return false;
        };
        let Some(origin) = self.state.user_location else {
            info!("User position unknown, requesting it");
            self.state.notice = Some(Notice::LocatingUser);
            self.spawn_locate();
            return false;
        };

        let ticket = self.ticket_for(place.id());
        self.state.calculating_route = true;
        self.pending_route = Some(ticket.clone());

        let estimator = self.estimator.clone();
        let tx = self.completion_tx.clone();
        let destination = place.location();
        let destination_id = place.id().to_string();
        tokio::spawn(async move {
            let modes = estimator
                .estimate(&origin, &destination, Some(&destination_id))
                .await;
            let _ = tx.send(Completion::Route { ticket, modes });
        });
        true
    }

    /// Present another travel mode; ignored while there is no travel data
    pub fn switch_mode(&mut self, mode: TravelMode) -> bool {
        if self.state.travel.is_none() {
            return false;
        }
        self.state.travel_mode = mode;
        true
    }

    /// Close the travel panel, keeping the selection
    pub fn dismiss_travel(&mut self) {
        self.clear_travel();
    }

    /// Delete the selected user marker
    ///
    /// Landmarks from the city dataset cannot be deleted.
    #[instrument(skip(self))]
    pub async fn delete_selected(&mut self) -> bool {
        let id = match &self.state.selection {
            Some(place) if place.is_user_marker() => place.id().to_string(),
            _ => {
                debug!("Selection is not a user marker");
                return false;
            },
        };

        self.store.remove(&id).await;
        self.state.markers = self.store.markers().to_vec();
        self.deselect();
        true
    }

    pub fn toggle_map_style(&mut self) {
        self.state.map_style = self.state.map_style.toggled();
    }

    /// Record a user position reported by the map surface or geolocation
    pub fn location_updated(&mut self, location: GeoLocation) {
        self.state.user_location = Some(location);
        if self.state.notice == Some(Notice::LocatingUser) {
            self.state.notice = None;
        }
    }

    /// Record that the position request failed; the position stays unknown
    pub fn location_failed(&mut self) {
        self.state.notice = Some(Notice::LocationUnavailable);
    }

    pub fn dismiss_notice(&mut self) {
        self.state.notice = None;
    }

    /// Wait for the next spawned lookup to finish
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.completion_rx.recv().await
    }

    /// Apply a finished lookup if it still matches the current state
    ///
    /// Returns whether the state changed.
    pub fn apply_completion(&mut self, completion: Completion) -> bool {
        match completion {
            Completion::Info { ticket, info } => {
                if self.pending_info.as_ref() != Some(&ticket) {
                    debug!(place_id = %ticket.place_id, "Dropping stale place info");
                    return false;
                }
                self.pending_info = None;
                self.state.info = Some(info);
                self.state.info_loading = false;
                true
            },
            Completion::Route { ticket, modes } => {
                if self.pending_route.as_ref() != Some(&ticket) {
                    debug!(place_id = %ticket.place_id, "Dropping stale route");
                    return false;
                }
                self.pending_route = None;
                self.state.travel = Some(modes);
                self.state.calculating_route = false;
                true
            },
            Completion::Location(location) => {
                self.locating = false;
                match location {
                    Some(location) => self.location_updated(location),
                    None => self.location_failed(),
                }
                true
            },
        }
    }

    /// Apply one command from a handle
    pub async fn handle(&mut self, command: MapCommand) {
        match command {
            MapCommand::SelectPlace(id) => {
                self.select_place(&id);
            },
            MapCommand::MapClicked(location) => self.map_clicked(location),
            MapCommand::Deselect => self.deselect(),
            MapCommand::EnterAddMode => self.enter_add_mode(),
            MapCommand::CancelAddMode => self.cancel_add_mode(),
            MapCommand::UpdateDraft(draft) => self.update_draft(draft),
            MapCommand::SaveMarker => {
                self.save_marker().await;
            },
            MapCommand::RequestRoute => {
                self.request_route();
            },
            MapCommand::SwitchMode(mode) => {
                self.switch_mode(mode);
            },
            MapCommand::DismissTravel => self.dismiss_travel(),
            MapCommand::DeleteSelected => {
                self.delete_selected().await;
            },
            MapCommand::ToggleMapStyle => self.toggle_map_style(),
            MapCommand::LocationUpdated(location) => self.location_updated(location),
            MapCommand::DismissNotice => self.dismiss_notice(),
        }
    }

    /// Run the controller on its own task
    pub fn spawn(self) -> (MapHandle, JoinHandle<()>) {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (snapshot_tx, snapshot_rx) = watch::channel(self.state.clone());
        let task = tokio::spawn(self.run(command_rx, snapshot_tx));
        let handle = MapHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
        };
        (handle, task)
    }

    async fn run(
        mut self,
        mut commands: mpsc::Receiver<(MapCommand, oneshot::Sender<MapState>)>,
        snapshots: watch::Sender<MapState>,
    ) {
        info!("Map controller started");
        loop {
            tokio::select! {
                command = commands.recv() => {
                    let Some((command, reply)) = command else {
                        break;
                    };
                    self.handle(command).await;
                    snapshots.send_replace(self.state.clone());
                    let _ = reply.send(self.state.clone());
                },
                Some(completion) = self.completion_rx.recv() => {
                    if self.apply_completion(completion) {
                        snapshots.send_replace(self.state.clone());
                    }
                },
            }
        }
        info!("Map controller stopped");
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending_info = None;
    }

    fn clear_travel(&mut self) {
        self.state.travel = None;
        self.state.calculating_route = false;
        self.pending_route = None;
    }

    fn ticket_for(&mut self, place_id: &str) -> SelectionTicket {
        self.requests = self.requests.wrapping_add(1);
        SelectionTicket {
            generation: self.generation,
            request: self.requests,
            place_id: place_id.to_string(),
        }
    }

    fn spawn_info_lookup(&self, ticket: SelectionTicket, place_name: String) {
        let port = Arc::clone(&self.place_info);
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let info = port.lookup(&place_name).await;
            let _ = tx.send(Completion::Info { ticket, info });
        });
    }

    fn spawn_locate(&mut self) {
        if self.locating {
            return;
        }
        self.locating = true;
        let port = Arc::clone(&self.geolocation);
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let location = match port.current_position().await {
                Ok(location) => Some(location),
                Err(e) => {
                    warn!(error = %e, "Geolocation failed");
                    None
                },
            };
            let _ = tx.send(Completion::Location(location));
        });
    }
}

/// Cloneable front end of a running [`MapController`]
#[derive(Debug, Clone)]
pub struct MapHandle {
    commands: mpsc::Sender<(MapCommand, oneshot::Sender<MapState>)>,
    snapshots: watch::Receiver<MapState>,
}

impl MapHandle {
    /// Send a command and wait for the state right after it was applied
    pub async fn send(&self, command: MapCommand) -> Result<MapState, ApplicationError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send((command, reply_tx))
            .await
            .map_err(|_| ApplicationError::Internal("map controller stopped".to_string()))?;
        reply_rx
            .await
            .map_err(|_| ApplicationError::Internal("map controller dropped reply".to_string()))
    }

    pub async fn select_place(&self, id: impl Into<String>) -> Result<MapState, ApplicationError> {
        self.send(MapCommand::SelectPlace(id.into())).await
    }

    pub async fn request_route(&self) -> Result<MapState, ApplicationError> {
        self.send(MapCommand::RequestRoute).await
    }

    pub async fn switch_mode(&self, mode: TravelMode) -> Result<MapState, ApplicationError> {
        self.send(MapCommand::SwitchMode(mode)).await
    }

    pub async fn location_updated(
        &self,
        location: GeoLocation,
    ) -> Result<MapState, ApplicationError> {
        self.send(MapCommand::LocationUpdated(location)).await
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> MapState {
        self.snapshots.borrow().clone()
    }

    /// Receiver that observes every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<MapState> {
        self.snapshots.clone()
    }

    /// Wait until a snapshot satisfies `predicate`
    pub async fn wait_for(
        &self,
        predicate: impl FnMut(&MapState) -> bool,
    ) -> Result<MapState, ApplicationError> {
        let mut rx = self.subscribe();
        let state = rx
            .wait_for(predicate)
            .await
            .map_err(|_| ApplicationError::Internal("map controller stopped".to_string()))?;
        Ok(state.clone())
    }
}
