//! Venue rows: one row per distinct venue, sorted lexically

use std::collections::{BTreeSet, HashMap};

use timeline_shared::Event;

/// Distinct venue names across `events`, sorted
pub fn derive_venues(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .map(|event| event.venue.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Sorted venue list with a reverse lookup from name to body row.
///
/// Rebuild it whenever the event list changes; row numbers are only stable
/// for one list.
#[derive(Debug, Clone, Default)]
pub struct VenueIndex {
    names: Vec<String>,
    rows: HashMap<String, usize>,
}

impl VenueIndex {
    pub fn from_events(events: &[Event]) -> Self {
        let names = derive_venues(events);
        let rows = names
            .iter()
            .enumerate()
            .map(|(row, name)| (name.clone(), row))
            .collect();
        Self { names, rows }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Body row of a venue (0-based, the header row is not counted)
    pub fn row_of(&self, venue: &str) -> Option<usize> {
        self.rows.get(venue).copied()
    }

    pub fn name_at(&self, row: usize) -> Option<&str> {
        self.names.get(row).map(String::as_str)
    }
}
