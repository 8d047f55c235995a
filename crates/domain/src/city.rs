//! The São Paulo dataset: landmarks and neighbourhoods

use crate::entities::{Landmark, LandmarkKind, Neighborhood};
use crate::value_objects::{Coordinates, GeoLocation};

/// City the dataset describes
pub const CITY_NAME: &str = "São Paulo";

struct LandmarkSeed {
    id: &'static str,
    name: &'static str,
    kind: LandmarkKind,
    lat: f64,
    lng: f64,
    x: f64,
    y: f64,
    description: &'static str,
    style: Option<(&'static str, &'static str)>,
}

const LANDMARKS: [LandmarkSeed; 9] = [
    LandmarkSeed {
        id: "casa_tininha",
        name: "Maison Tininha",
        kind: LandmarkKind::Custom,
        lat: -23.5934,
        lng: -46.7265,
        x: 310.0,
        y: 580.0,
        description: "Adresse : Rua Dr. Cristiano de Sousa, 122 - Jardim Leonor, São Paulo - SP, 05658-010. Située en Zone Sud, près du Stade Morumbi.",
        style: Some(("#8b5cf6", "home")),
    },
    LandmarkSeed {
        id: "ambienta",
        name: "Bureau Ambienta",
        kind: LandmarkKind::Custom,
        lat: -23.582_772,
        lng: -46.685_338,
        x: 350.0,
        y: 540.0,
        description: "Espace de travail Ambienta situé à Jardim Paulistano.",
        style: Some(("#f97316", "work")),
    },
    LandmarkSeed {
        id: "casa_christina",
        name: "Maison de Christina",
        kind: LandmarkKind::Custom,
        lat: -23.633_575,
        lng: -46.736_021,
        x: 290.0,
        y: 680.0,
        description: "Résidence située à Vila Andrade.",
        style: Some(("#8b5cf6", "building")),
    },
    LandmarkSeed {
        id: "estacao_butanta",
        name: "Gare de Butantã",
        kind: LandmarkKind::Custom,
        lat: -23.5718,
        lng: -46.7086,
        x: 280.0,
        y: 480.0,
        description: "Pôle de transport multimodal (Métro et Bus).",
        style: Some(("#06b6d4", "train")),
    },
    LandmarkSeed {
        id: "paulista",
        name: "Avenue Paulista",
        kind: LandmarkKind::Street,
        lat: -23.5614,
        lng: -46.6559,
        x: 380.0,
        y: 500.0,
        description: "Le cœur financier et culturel de São Paulo, célèbre pour ses musées et ses gratte-ciel.",
        style: None,
    },
    LandmarkSeed {
        id: "se_cathedral",
        name: "Cathédrale Métropolitaine de la Sé",
        kind: LandmarkKind::Monument,
        lat: -23.5504,
        lng: -46.6339,
        x: 500.0,
        y: 475.0,
        description: "Point zéro de la ville, l'un des plus grands temples néogothiques au monde.",
        style: None,
    },
    LandmarkSeed {
        id: "ibirapuera",
        name: "Parc d'Ibirapuera",
        kind: LandmarkKind::Park,
        lat: -23.5874,
        lng: -46.6576,
        x: 450.0,
        y: 700.0,
        description: "Le parc le plus important de la ville, avec des lacs, des musées et des pistes cyclables.",
        style: None,
    },
    LandmarkSeed {
        id: "masp",
        name: "MASP (Musée d'Art de São Paulo)",
        kind: LandmarkKind::Monument,
        lat: -23.5615,
        lng: -46.6559,
        x: 380.0,
        y: 500.0,
        description: "Musée emblématique célèbre pour son architecture suspendue sur quatre piliers rouges.",
        style: None,
    },
    LandmarkSeed {
        id: "mercadão",
        name: "Grand Marché Municipal",
        kind: LandmarkKind::Monument,
        lat: -23.5417,
        lng: -46.6297,
        x: 520.0,
        y: 450.0,
        description: "Le célèbre Marché Municipal, connu pour son architecture, ses vitraux et ses fruits exotiques.",
        style: None,
    },
];

const NEIGHBORHOODS: [(&str, &str); 12] = [
    ("se", "Le Centre (Sé)"),
    ("republica", "République"),
    ("liberdade", "Quartier de la Liberté"),
    ("santana", "Santana (Nord)"),
    ("vmaria", "Vila Maria"),
    ("vMariana", "Vila Mariana"),
    ("moema", "Moema"),
    ("tatuape", "Tatuapé"),
    ("mooca", "Mooca"),
    ("pinheiros", "Pinheiros"),
    ("butanta", "Butantã"),
    ("lapa", "Lapa"),
];

/// Static landmarks of the city, in display order
#[must_use]
pub fn landmarks() -> Vec<Landmark> {
    LANDMARKS
        .iter()
        .map(|seed| Landmark {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            kind: seed.kind,
            coordinates: Coordinates::new(GeoLocation::new_unchecked(seed.lat, seed.lng))
                .with_illustrated(seed.x, seed.y),
            description: seed.description.to_string(),
            color: seed.style.map(|(color, _)| color.to_string()),
            symbol: seed.style.map(|(_, symbol)| symbol.to_string()),
        })
        .collect()
}

/// Neighbourhoods of the city
#[must_use]
pub fn neighborhoods() -> Vec<Neighborhood> {
    NEIGHBORHOODS
        .iter()
        .map(|(id, name)| Neighborhood {
            id: (*id).to_string(),
            name: (*name).to_string(),
            description: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn landmark_ids_are_unique() {
        let all = landmarks();
        let ids: HashSet<_> = all.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn custom_landmarks_carry_style() {
        for landmark in landmarks().iter().filter(|l| l.is_custom()) {
            assert!(landmark.color.is_some(), "{}", landmark.id);
            assert!(landmark.symbol.is_some(), "{}", landmark.id);
        }
    }

    #[test]
    fn coordinates_are_valid_and_in_the_city() {
        for landmark in landmarks() {
            let loc = landmark.location();
            assert!(GeoLocation::new(loc.latitude(), loc.longitude()).is_ok());
            assert!((-23.8..=-23.3).contains(&loc.latitude()), "{}", landmark.id);
            assert!((-46.9..=-46.4).contains(&loc.longitude()), "{}", landmark.id);
        }
    }

    #[test]
    fn neighborhoods_listed() {
        let all = neighborhoods();
        assert_eq!(all.len(), 12);
        assert_eq!(all[0].name, "Le Centre (Sé)");
    }
}
