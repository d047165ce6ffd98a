// UI shell state: the sidebar controls and the event dialog.
// The grid only ever reads this; the shell is the single writer.

use serde::{Deserialize, Serialize};

use crate::{Event, View};

/// Sidebar and dialog state owned by the UI shell
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    /// Empty string means "All Events"
    pub category: String,
    /// Free-text filter, empty means no filter
    pub filter: String,
    pub view: View,
    pub selected: Option<Event>,
    pub dialog_open: bool,
}

/// Detailed change detection result
#[derive(Debug, Clone, PartialEq)]
pub struct StateChangeDetection {
    pub has_changes: bool,
    pub category_changed: bool,
    pub filter_changed: bool,
    pub view_changed: bool,
    pub selection_changed: bool,
    pub requires_data_fetch: bool,
    pub requires_relayout: bool,
    pub change_summary: Vec<String>,
}

impl UiState {
    /// Select an event and open its dialog
    pub fn select(&mut self, event: Event) {
        self.selected = Some(event);
        self.dialog_open = true;
    }

    /// Close the dialog; the selection is kept so it can fade out
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    pub fn detect_changes_from(&self, previous: &UiState) -> StateChangeDetection {
        let mut change_summary = Vec::new();

        let category_changed = self.category != previous.category;
        if category_changed {
            change_summary.push(format!(
                "Category changed: {:?} → {:?}",
                previous.category, self.category
            ));
        }

        let filter_changed = self.filter != previous.filter;
        if filter_changed {
            change_summary.push(format!(
                "Filter changed: {:?} → {:?}",
                previous.filter, self.filter
            ));
        }

        let view_changed = self.view != previous.view;
        if view_changed {
            change_summary.push(format!("View changed: {} → {}", previous.view, self.view));
        }

        let selection_changed =
            self.selected != previous.selected || self.dialog_open != previous.dialog_open;
        if selection_changed {
            change_summary.push("Selection changed".to_string());
        }

        let has_changes = category_changed || filter_changed || view_changed || selection_changed;

        StateChangeDetection {
            has_changes,
            category_changed,
            filter_changed,
            view_changed,
            selection_changed,
            requires_data_fetch: category_changed || filter_changed,
            requires_relayout: view_changed,
            change_summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_default_state() {
        let state = UiState::default();
        assert_eq!(state.view, View::Day);
        assert!(state.category.is_empty());
        assert!(!state.dialog_open);
    }

    #[test]
    fn test_filter_change_requires_fetch() {
        let previous = UiState::default();
        let current = UiState {
            filter: "royal".to_string(),
            ..UiState::default()
        };

        let changes = current.detect_changes_from(&previous);
        assert!(changes.has_changes);
        assert!(changes.filter_changed);
        assert!(changes.requires_data_fetch);
        assert!(!changes.requires_relayout);
    }

    #[test]
    fn test_view_change_only_relayouts() {
        let previous = UiState::default();
        let current = UiState {
            view: View::Month,
            ..UiState::default()
        };

        let changes = current.detect_changes_from(&previous);
        assert!(changes.view_changed);
        assert!(changes.requires_relayout);
        assert!(!changes.requires_data_fetch);
    }

    #[test]
    fn test_selection_opens_dialog() {
        let previous = UiState::default();
        let mut current = previous.clone();
        let start = Utc.with_ymd_and_hms(2024, 10, 30, 19, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 10, 30, 23, 0, 0).unwrap();
        current.select(Event::new("The Libertines", Category::Music, "Roundhouse", start, end));

        assert!(current.dialog_open);
        let changes = current.detect_changes_from(&previous);
        assert!(changes.selection_changed);
        assert!(!changes.requires_data_fetch);

        current.close_dialog();
        assert!(!current.dialog_open);
        assert!(current.selected.is_some());
    }
}
