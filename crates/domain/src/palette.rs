//! Colours and symbols offered when creating a marker

/// A named marker colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerColor {
    pub name: &'static str,
    pub hex: &'static str,
}

/// Colours in picker order; the first is the form default
pub const MARKER_COLORS: [MarkerColor; 7] = [
    MarkerColor { name: "Émeraude", hex: "#10b981" },
    MarkerColor { name: "Rubis", hex: "#ef4444" },
    MarkerColor { name: "Saphir", hex: "#3b82f6" },
    MarkerColor { name: "Or", hex: "#f59e0b" },
    MarkerColor { name: "Améthyste", hex: "#8b5cf6" },
    MarkerColor { name: "Onyx", hex: "#1f2937" },
    MarkerColor { name: "Ciel", hex: "#06b6d4" },
];

/// Symbol identifiers in picker order; the first is the form default
pub const MARKER_SYMBOLS: [&str; 6] = ["map-pin", "home", "building", "work", "school", "train"];

/// Default colour of a new marker
#[must_use]
pub const fn default_color() -> &'static str {
    MARKER_COLORS[0].hex
}

/// Default symbol of a new marker
#[must_use]
pub const fn default_symbol() -> &'static str {
    MARKER_SYMBOLS[0]
}

/// Symbol to draw for an identifier, falling back to the map pin
#[must_use]
pub fn resolve_symbol(id: &str) -> &'static str {
    MARKER_SYMBOLS
        .iter()
        .copied()
        .find(|symbol| *symbol == id)
        .unwrap_or_else(default_symbol)
}
