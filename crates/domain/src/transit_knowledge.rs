//! Static knowledge of which bus and train lines serve a destination
//!
//! Line identifiers are plausible SPTrans bus lines and metro/CPTM lines
//! when travelling from the Morumbi area. They are suggestions shown next to
//! an estimate, not a timetable.

use std::collections::HashMap;

/// Lines suggested for reaching one destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitEntry {
    /// Bus lines
    pub lines: Vec<String>,
    /// Metro and commuter rail lines
    pub train_lines: Option<Vec<String>>,
}

impl TransitEntry {
    #[must_use]
    pub fn new(lines: &[&str], train_lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(ToString::to_string).collect(),
            train_lines: Some(train_lines.iter().map(ToString::to_string).collect()),
        }
    }
}

/// Destination id → transit lines, with a guaranteed fallback entry
#[derive(Debug, Clone)]
pub struct TransitKnowledge {
    entries: HashMap<String, TransitEntry>,
    fallback: TransitEntry,
}

impl TransitKnowledge {
    /// An empty table answering every lookup with `fallback`
    #[must_use]
    pub fn new(fallback: TransitEntry) -> Self {
        Self {
            entries: HashMap::new(),
            fallback,
        }
    }

    /// Add or replace the entry for a destination id
    #[must_use]
    pub fn with_entry(mut self, destination_id: impl Into<String>, entry: TransitEntry) -> Self {
        self.entries.insert(destination_id.into(), entry);
        self
    }

    /// Lines for a destination
    ///
    /// Exact id match only; unknown or missing ids get the fallback entry.
    #[must_use]
    pub fn lookup(&self, destination_id: Option<&str>) -> &TransitEntry {
        destination_id
            .and_then(|id| self.entries.get(id))
            .unwrap_or(&self.fallback)
    }

    /// The entry returned for unknown destinations
    #[must_use]
    pub const fn fallback(&self) -> &TransitEntry {
        &self.fallback
    }

    /// The São Paulo table
    #[must_use]
    pub fn sao_paulo() -> Self {
        Self::new(TransitEntry::new(&["809P-10", "6412-10"], &["Ligne 9-Émeraude"]))
            .with_entry(
                "paulista",
                TransitEntry::new(
                    &["809U-10", "709P-10", "6414-10"],
                    &["Ligne 9-Émeraude", "Ligne 4-Jaune"],
                ),
            )
            .with_entry(
                "se_cathedral",
                TransitEntry::new(&["6451-10", "5111-10"], &["Ligne 9-Émeraude", "Ligne 1-Bleue"]),
            )
            .with_entry(
                "ibirapuera",
                TransitEntry::new(
                    &["5154-10", "6414-10", "6412-10"],
                    &["Ligne 9-Émeraude", "Ligne 5-Lilas"],
                ),
            )
            .with_entry(
                "masp",
                TransitEntry::new(&["809U-10", "669A-10"], &["Ligne 4-Jaune", "Ligne 2-Verte"]),
            )
            .with_entry(
                "mercadão",
                TransitEntry::new(
                    &["6451-10", "6450-10"],
                    &["Ligne 9-Émeraude", "Express Tiradentes"],
                ),
            )
    }
}

impl Default for TransitKnowledge {
    fn default() -> Self {
        Self::sao_paulo()
    }
}
