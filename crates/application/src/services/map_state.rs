//! Read-only snapshot of the map interaction state
//!
//! The controller mutates a [`MapState`] through named transitions and hands
//! out clones of it. Renderers never write to it.

use std::sync::Arc;

use domain::entities::{CustomMarker, Landmark, PlaceInfo, RouteGeometry, RouteInfo, TravelModes};
use domain::palette;
use domain::value_objects::{GeoLocation, MapStyle, TravelMode};

use super::location_helper;
use super::marker_service::NewMarker;

/// What the user currently has selected
#[derive(Debug, Clone, PartialEq)]
pub enum SelectedPlace {
    /// A landmark from the static city dataset
    Landmark(Landmark),
    /// A marker the user created
    Marker(CustomMarker),
}

impl SelectedPlace {
    pub fn id(&self) -> &str {
        match self {
            Self::Landmark(l) => &l.id,
            Self::Marker(m) => &m.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Landmark(l) => &l.name,
            Self::Marker(m) => &m.name,
        }
    }

    pub fn location(&self) -> GeoLocation {
        match self {
            Self::Landmark(l) => l.location(),
            Self::Marker(m) => m.location(),
        }
    }

    /// Description to show without asking the text-info provider
    ///
    /// Only personal places and user markers have one.
    pub fn local_description(&self) -> Option<&str> {
        match self {
            Self::Landmark(l) if l.is_custom() => Some(&l.description),
            Self::Landmark(_) => None,
            Self::Marker(m) => Some(&m.description),
        }
    }

    /// Whether this selection can be deleted
    pub const fn is_user_marker(&self) -> bool {
        matches!(self, Self::Marker(_))
    }
}

/// Marker creation mode
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AddMode {
    #[default]
    Off,
    /// Waiting for the user to tap the map
    AwaitingTap,
    /// A position was tapped and awaits the save
    Pending(GeoLocation),
}

impl AddMode {
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Off)
    }

    pub const fn pending(&self) -> Option<GeoLocation> {
        match self {
            Self::Pending(location) => Some(*location),
            _ => None,
        }
    }
}

/// The marker creation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerDraft {
    pub title: String,
    pub description: String,
    pub color: String,
    pub symbol: String,
}

impl Default for MarkerDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            color: palette::default_color().to_string(),
            symbol: palette::default_symbol().to_string(),
        }
    }
}

impl MarkerDraft {
    pub(crate) fn to_new_marker(&self, coordinates: Option<GeoLocation>) -> NewMarker {
        NewMarker {
            title: self.title.clone(),
            description: self.description.clone(),
            color: self.color.clone(),
            symbol: self.symbol.clone(),
            coordinates,
        }
    }
}

/// User-visible message raised by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A route was requested before the user position was known
    LocatingUser,
    /// The position request failed
    LocationUnavailable,
}

impl Notice {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::LocatingUser => {
                "Localisation en cours... (Suggestion : Utilisez la gare Morumbi comme point de départ)"
            },
            Self::LocationUnavailable => "Position indisponible. Réessayez plus tard.",
        }
    }
}

/// Everything a renderer needs to draw the map and its panels
#[derive(Debug, Clone)]
pub struct MapState {
    /// Static city landmarks
    pub landmarks: Arc<[Landmark]>,
    /// User markers, in creation order
    pub markers: Vec<CustomMarker>,
    pub selection: Option<SelectedPlace>,
    pub add_mode: AddMode,
    pub draft: MarkerDraft,
    /// Text shown for the selection, once loaded
    pub info: Option<PlaceInfo>,
    pub info_loading: bool,
    /// Estimates for the selection; `None` hides the travel panel
    pub travel: Option<TravelModes>,
    /// Mode presented in the travel panel, kept across computations
    pub travel_mode: TravelMode,
    pub calculating_route: bool,
    pub user_location: Option<GeoLocation>,
    pub map_style: MapStyle,
    pub notice: Option<Notice>,
}

impl MapState {
    /// Initial state: nothing selected, add mode off, no travel data
    pub fn new(landmarks: impl Into<Arc<[Landmark]>>, markers: Vec<CustomMarker>) -> Self {
        Self {
            landmarks: landmarks.into(),
            markers,
            selection: None,
            add_mode: AddMode::Off,
            draft: MarkerDraft::default(),
            info: None,
            info_loading: false,
            travel: None,
            travel_mode: TravelMode::default(),
            calculating_route: false,
            user_location: None,
            map_style: MapStyle::default(),
            notice: None,
        }
    }

    /// Find a landmark or user marker by id
    pub fn find_place(&self, id: &str) -> Option<SelectedPlace> {
        self.landmarks
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .map(SelectedPlace::Landmark)
            .or_else(|| {
                self.markers
                    .iter()
                    .find(|m| m.id == id)
                    .cloned()
                    .map(SelectedPlace::Marker)
            })
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selection.as_ref().map(SelectedPlace::id)
    }

    /// Estimate for the presented travel mode
    pub fn current_route(&self) -> Option<&RouteInfo> {
        self.travel.as_ref().map(|t| t.get(self.travel_mode))
    }

    /// Polyline of the presented route, if one was found
    pub fn route_geometry(&self) -> Option<&RouteGeometry> {
        self.current_route().and_then(|r| r.geometry.as_ref())
    }

    /// Colour of the presented route polyline
    pub fn route_color(&self) -> Option<&'static str> {
        self.travel.as_ref().map(|_| self.travel_mode.route_color())
    }

    /// Deep link to external navigation from the user to the selection
    pub fn navigation_link(&self) -> Option<String> {
        let origin = self.user_location?;
        let destination = self.selection.as_ref()?.location();
        Some(location_helper::directions_link(
            &origin,
            &destination,
            self.travel_mode,
        ))
    }
}
