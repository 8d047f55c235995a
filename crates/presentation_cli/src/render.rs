//! Text rendering of map snapshots

use std::fmt::Write;

use application::services::MapState;
use domain::entities::{CustomMarker, Landmark, LandmarkKind, PlaceInfo, RouteInfo};
use domain::value_objects::TravelMode;

const fn kind_label(kind: LandmarkKind) -> &'static str {
    match kind {
        LandmarkKind::Monument => "monument",
        LandmarkKind::Park => "parc",
        LandmarkKind::Street => "rue",
        LandmarkKind::River => "rivière",
        LandmarkKind::Custom => "perso",
    }
}

const fn mode_label(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Car => "Voiture",
        TravelMode::Train => "Métro/Train",
        TravelMode::Bus => "Bus",
    }
}

pub fn landmark_line(landmark: &Landmark) -> String {
    format!(
        "{:<18} {:<9} {}  ({})",
        landmark.id,
        kind_label(landmark.kind),
        landmark.name,
        landmark.location()
    )
}

pub fn marker_line(marker: &CustomMarker) -> String {
    format!(
        "{:<28} {} [{} {}]  ({})",
        marker.id,
        marker.name,
        marker.color,
        marker.symbol,
        marker.location()
    )
}

/// `40 min` below an hour, `1 h 05` above
pub fn duration(minutes: u32) -> String {
    if minutes < 60 {
        format!("{minutes} min")
    } else {
        format!("{} h {:02}", minutes / 60, minutes % 60)
    }
}

fn route_line(route: &RouteInfo) -> String {
    if route.is_unavailable() {
        return "itinéraire indisponible".to_string();
    }
    format!("{:.1} km · {}", route.distance_km, duration(route.duration_minutes))
}

pub fn place_info(name: &str, info: &PlaceInfo) -> String {
    let mut out = format!("📍 {name}\n\n{}\n", info.text);
    if !info.links.is_empty() {
        out.push('\n');
        for link in &info.links {
            let _ = writeln!(out, "  🔗 {}: {}", link.title, link.uri);
        }
    }
    out
}

/// Travel panel for the current selection, `None` while nothing is computed
pub fn travel(state: &MapState) -> Option<String> {
    let modes = state.travel.as_ref()?;
    let name = state.selection.as_ref().map_or("?", |s| s.name());
    let mut out = format!("🧭 Trajet vers {name}\n\n");

    for mode in TravelMode::ALL {
        let route = modes.get(mode);
        let cursor = if mode == state.travel_mode { '>' } else { ' ' };
        let _ = writeln!(out, "{cursor} {:<12} {}", mode_label(mode), route_line(route));
        if let Some(lines) = route.lines.as_ref().filter(|l| !l.is_empty()) {
            let _ = writeln!(out, "  {:<12} lignes : {}", "", lines.join(", "));
        }
    }

    if let Some(link) = state.navigation_link() {
        let _ = write!(out, "\nNavigation : {link}\n");
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use domain::city;
    use domain::entities::{RouteGeometry, TravelModes};
    use domain::value_objects::GeoLocation;

    use super::*;

    #[test]
    fn duration_formats() {
        assert_eq!(duration(0), "0 min");
        assert_eq!(duration(40), "40 min");
        assert_eq!(duration(60), "1 h 00");
        assert_eq!(duration(125), "2 h 05");
    }

    #[test]
    fn unavailable_route_is_labelled() {
        assert_eq!(route_line(&RouteInfo::unavailable()), "itinéraire indisponible");
    }

    #[test]
    fn place_info_lists_links() {
        let info = PlaceInfo {
            text: "Un musée.".to_string(),
            links: vec![domain::entities::PlaceLink::new("https://maps.google.com/?cid=1", None)],
        };
        let out = place_info("MASP", &info);
        assert!(out.contains("MASP"));
        assert!(out.contains("Un musée."));
        assert!(out.contains("Voir sur Google Maps: https://maps.google.com/?cid=1"));
    }

    #[test]
    fn travel_panel_marks_current_mode() {
        let mut state = MapState::new(city::landmarks(), Vec::new());
        assert!(travel(&state).is_none());

        let base = RouteInfo {
            distance_km: 12.3,
            duration_minutes: 40,
            geometry: Some(RouteGeometry::new(vec![[-46.72, -23.59], [-46.65, -23.56]])),
            lines: None,
        };
        state.selection = state.find_place("masp");
        state.user_location = Some(GeoLocation::new_unchecked(-23.5934, -46.7265));
        state.travel = Some(TravelModes {
            car: base.clone(),
            train: base.scaled(0.75, Some(vec!["Ligne 4-Jaune".to_string()])),
            bus: base.scaled(1.5, Some(vec!["809U-10".to_string()])),
        });
        state.travel_mode = TravelMode::Bus;

        let out = travel(&state).unwrap();
        assert!(out.contains("> Bus"));
        assert!(out.contains("12.3 km · 40 min"));
        assert!(out.contains("12.3 km · 1 h 00"));
        assert!(out.contains("lignes : 809U-10"));
        assert!(out.contains("travelmode=transit"));
    }

    #[test]
    fn landmark_line_shows_kind() {
        let landmarks = city::landmarks();
        let line = landmark_line(&landmarks[0]);
        assert!(line.starts_with("casa_tininha"));
        assert!(line.contains("perso"));
    }
}
