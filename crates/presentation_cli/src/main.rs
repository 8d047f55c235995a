//! CityMap CLI
//!
//! Browse the São Paulo landmarks, look places up, estimate travel times and
//! manage personal markers from the terminal.

#![allow(clippy::print_stdout)]

mod render;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use application::services::{
    MapCommand, MapController, MapHandle, MapState, MarkerDraft, MarkerStore, Notice,
    SelectedPlace, TravelEstimator, location_helper,
};
use clap::{Parser, Subcommand};
use domain::city;
use domain::palette;
use domain::transit_knowledge::TransitKnowledge;
use domain::value_objects::{GeoLocation, TravelMode};
use infrastructure::{
    AppConfig, ConfiguredGeolocation, GeminiPlaceInfoAdapter, JsonFileMarkerStorage,
    OsrmRoutingAdapter,
};
use tracing::debug;

/// Grace period on top of the provider timeouts
const WAIT_MARGIN: Duration = Duration::from_secs(5);

/// CityMap CLI
#[derive(Parser)]
#[command(name = "citymap-cli")]
#[command(author, version, about = "São Paulo tourist map CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./citymap.toml when present)
    #[arg(short, long, env = "CITYMAP_CONFIG")]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List landmarks and personal markers
    Landmarks,

    /// List the city's neighbourhoods
    Neighborhoods,

    /// Show the description of a landmark or marker
    ///
    /// Personal places print their stored description; other landmarks are
    /// looked up with Gemini.
    Info {
        /// Landmark or marker id
        id: String,
    },

    /// Estimate car, train and bus travel to a landmark or marker
    ///
    /// Example: citymap-cli route masp --from -23.5934,-46.7265 --mode bus
    Route {
        /// Destination id
        id: String,

        /// Starting point as `lat,lng` (default: configured position)
        #[arg(long, value_parser = parse_coordinates, allow_hyphen_values = true)]
        from: Option<GeoLocation>,

        /// Mode to highlight: car, train or bus
        #[arg(short, long, default_value = "car")]
        mode: TravelMode,
    },

    /// Manage personal markers
    #[command(subcommand)]
    Markers(MarkerCommands),

    /// Print a Google Maps link for a landmark id or any place name
    Link {
        /// Landmark id, marker id or free text
        place: String,
    },
}

#[derive(Subcommand)]
enum MarkerCommands {
    /// List personal markers
    List,

    /// Create a marker
    ///
    /// Example: citymap-cli markers add "Padaria" --at -23.5701,-46.6912 --color rubis
    Add {
        /// Marker title
        title: String,

        /// Position as `lat,lng`
        #[arg(long, value_parser = parse_coordinates, allow_hyphen_values = true)]
        at: GeoLocation,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Palette colour name or `#rrggbb`
        #[arg(long, value_parser = parse_color)]
        color: Option<String>,

        /// Symbol identifier (map-pin, home, building, work, school, train)
        #[arg(long)]
        symbol: Option<String>,
    },

    /// Delete a marker
    Remove {
        /// Marker id
        id: String,
    },
}

/// Determine log filter level from verbosity count
///
/// Zero keeps the configured level.
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Parse `lat,lng`
fn parse_coordinates(s: &str) -> Result<GeoLocation, String> {
    let (lat, lng) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `lat,lng`, got `{s}`"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude `{}`", lat.trim()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude `{}`", lng.trim()))?;
    GeoLocation::new(lat, lng).map_err(|e| e.to_string())
}

/// Palette colour name (any case) or a `#rrggbb` hex value
fn parse_color(s: &str) -> Result<String, String> {
    if let Some(color) = palette::MARKER_COLORS
        .iter()
        .find(|c| c.name.to_lowercase() == s.to_lowercase() || c.hex.eq_ignore_ascii_case(s))
    {
        return Ok(color.hex.to_string());
    }

    let is_hex = s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit());
    if is_hex {
        Ok(s.to_lowercase())
    } else {
        Err(format!("unknown colour `{s}`"))
    }
}

async fn build_controller(
    config: &AppConfig,
    position: Option<GeoLocation>,
) -> anyhow::Result<MapController> {
    let storage = JsonFileMarkerStorage::new(config.storage.markers_path.clone());
    let store = MarkerStore::load(Arc::new(storage)).await;

    let routing = OsrmRoutingAdapter::from_config(&config.routing)?;
    let place_info = GeminiPlaceInfoAdapter::from_config(&config.place_info)?;
    let geolocation = ConfiguredGeolocation::new(position.or_else(|| config.default_position()));
    let estimator = TravelEstimator::new(
        Arc::new(routing),
        Arc::new(TransitKnowledge::sao_paulo()),
    );

    Ok(MapController::new(
        city::landmarks(),
        store,
        estimator,
        Arc::new(place_info),
        Arc::new(geolocation),
    ))
}

async fn wait_until(
    handle: &MapHandle,
    limit: Duration,
    predicate: impl FnMut(&MapState) -> bool,
) -> anyhow::Result<MapState> {
    let state = tokio::time::timeout(limit, handle.wait_for(predicate))
        .await
        .context("Timed out waiting for the map")??;
    Ok(state)
}

async fn select(handle: &MapHandle, id: &str) -> anyhow::Result<MapState> {
    let state = handle.select_place(id).await?;
    if state.selected_id() != Some(id) {
        bail!("Unknown place: {id}");
    }
    Ok(state)
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
#[allow(clippy::too_many_lines)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;
    config.validate().map_err(anyhow::Error::msg)?;

    // Set up logging based on verbosity
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        config.logging.level = filter.to_string();
    }
    infrastructure::init_logging(&config.logging)?;

    let info_wait = Duration::from_secs(config.place_info.timeout_secs) + WAIT_MARGIN;
    let route_wait = Duration::from_secs(config.routing.timeout_secs) + WAIT_MARGIN;

    match cli.command {
        Commands::Landmarks => {
            let controller = build_controller(&config, None).await?;
            let state = controller.state();

            if cli.json {
                print_json(&serde_json::json!({
                    "landmarks": &*state.landmarks,
                    "markers": state.markers,
                }))?;
            } else {
                println!("🏛️  Landmarks:");
                for landmark in state.landmarks.iter() {
                    println!("  {}", render::landmark_line(landmark));
                }
                if !state.markers.is_empty() {
                    println!("\n📌 Markers:");
                    for marker in &state.markers {
                        println!("  {}", render::marker_line(marker));
                    }
                }
            }
        },

        Commands::Neighborhoods => {
            let neighborhoods = city::neighborhoods();
            if cli.json {
                print_json(&neighborhoods)?;
            } else {
                println!("🏘️  Quartiers de {}:", city::CITY_NAME);
                for n in &neighborhoods {
                    println!("  {:<10} {}", n.id, n.name);
                }
            }
        },

        Commands::Info { id } => {
            let (handle, _task) = build_controller(&config, None).await?.spawn();
            select(&handle, &id).await?;
            let state = wait_until(&handle, info_wait, |s| !s.info_loading).await?;

            let (Some(place), Some(info)) = (&state.selection, &state.info) else {
                bail!("No description for {id}");
            };
            if cli.json {
                print_json(info)?;
            } else {
                print!("{}", render::place_info(place.name(), info));
            }
        },

        Commands::Route { id, from, mode } => {
            let (handle, _task) = build_controller(&config, None).await?.spawn();
            select(&handle, &id).await?;
            if let Some(origin) = from {
                handle.location_updated(origin).await?;
            }

            let state = handle.request_route().await?;
            if !state.calculating_route && state.travel.is_none() {
                debug!("Position unknown, waiting for geolocation");
                let state = wait_until(&handle, route_wait, |s| {
                    s.user_location.is_some() || s.notice == Some(Notice::LocationUnavailable)
                })
                .await?;
                if state.user_location.is_none() {
                    bail!(
                        "{} Pass --from lat,lng or set [geolocation] in the configuration.",
                        Notice::LocationUnavailable.message()
                    );
                }
                handle.request_route().await?;
            }

            wait_until(&handle, route_wait, |s| {
                s.travel.is_some() && !s.calculating_route
            })
            .await?;
            let state = handle.switch_mode(mode).await?;

            if cli.json {
                print_json(&serde_json::json!({
                    "destination": id,
                    "mode": state.travel_mode,
                    "travel": state.travel,
                    "routeColor": state.route_color(),
                    "navigationLink": state.navigation_link(),
                }))?;
            } else if let Some(panel) = render::travel(&state) {
                print!("{panel}");
            }
        },

        Commands::Markers(MarkerCommands::List) => {
            let controller = build_controller(&config, None).await?;
            let markers = &controller.state().markers;
            if cli.json {
                print_json(markers)?;
            } else if markers.is_empty() {
                println!("No markers yet.");
            } else {
                for marker in markers {
                    println!("{}", render::marker_line(marker));
                }
            }
        },

        Commands::Markers(MarkerCommands::Add {
            title,
            at,
            description,
            color,
            symbol,
        }) => {
            let (handle, _task) = build_controller(&config, None).await?.spawn();
            let draft = MarkerDraft {
                title,
                description,
                color: color.unwrap_or_else(|| palette::default_color().to_string()),
                symbol: palette::resolve_symbol(symbol.as_deref().unwrap_or_default())
                    .to_string(),
            };

            handle.send(MapCommand::EnterAddMode).await?;
            handle.send(MapCommand::MapClicked(at)).await?;
            handle.send(MapCommand::UpdateDraft(draft)).await?;
            let state = handle.send(MapCommand::SaveMarker).await?;

            let Some(SelectedPlace::Marker(marker)) = &state.selection else {
                bail!("Marker not saved: a title is required");
            };
            if cli.json {
                print_json(marker)?;
            } else {
                println!("✅ Created {}", render::marker_line(marker));
            }
        },

        Commands::Markers(MarkerCommands::Remove { id }) => {
            let (handle, _task) = build_controller(&config, None).await?.spawn();
            let state = select(&handle, &id).await?;
            if !state.selection.as_ref().is_some_and(SelectedPlace::is_user_marker) {
                bail!("{id} is a city landmark and cannot be deleted");
            }

            handle.send(MapCommand::DeleteSelected).await?;
            println!("🗑️  Removed {id}");
        },

        Commands::Link { place } => {
            let controller = build_controller(&config, None).await?;
            let link = controller.state().find_place(&place).map_or_else(
                || location_helper::generate_maps_link(&place),
                |found| location_helper::generate_maps_link_coords(&found.location()),
            );
            println!("{link}");
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_verbosity_zero_keeps_config() {
        assert_eq!(log_filter_from_verbosity(0), None);
    }

    #[test]
    fn log_filter_verbosity_levels() {
        assert_eq!(log_filter_from_verbosity(1), Some("info"));
        assert_eq!(log_filter_from_verbosity(2), Some("debug"));
        assert_eq!(log_filter_from_verbosity(3), Some("trace"));
        assert_eq!(log_filter_from_verbosity(10), Some("trace"));
    }

    #[test]
    fn coordinates_parse() {
        let loc = parse_coordinates("-23.5934,-46.7265").unwrap();
        assert!((loc.latitude() - -23.5934).abs() < f64::EPSILON);
        assert!((loc.longitude() - -46.7265).abs() < f64::EPSILON);

        assert!(parse_coordinates(" -23.5 , -46.6 ").is_ok());
    }

    #[test]
    fn coordinates_reject_garbage() {
        assert!(parse_coordinates("-23.5").is_err());
        assert!(parse_coordinates("abc,-46.6").is_err());
        assert!(parse_coordinates("-23.5,xyz").is_err());
        assert!(parse_coordinates("95,0").is_err());
    }

    #[test]
    fn colors_by_name_or_hex() {
        assert_eq!(parse_color("Rubis").unwrap(), "#ef4444");
        assert_eq!(parse_color("émeraude").unwrap(), "#10b981");
        assert_eq!(parse_color("#ABCDEF").unwrap(), "#abcdef");
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("chartreuse").is_err());
    }

    #[tokio::test]
    async fn controller_starts_with_city_and_markers() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.storage.markers_path = dir.path().join("markers.json");

        let controller = build_controller(&config, None).await.unwrap();
        assert_eq!(controller.state().landmarks.len(), city::landmarks().len());
        assert!(controller.state().markers.is_empty());
    }
}
