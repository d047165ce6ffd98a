use serde::{Deserialize, Serialize};
use timeline_shared::{Category, Event};

/// Category and free-text constraint on the event list
///
/// Empty strings mean "no constraint". The category must name a listing
/// category exactly; the filter matches title or venue, ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventQuery {
    pub category: String,
    pub filter: String,
}

impl EventQuery {
    pub fn new(category: impl Into<String>, filter: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            filter: filter.into(),
        }
    }

    /// Query that matches every event
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.matches_category(event) && self.matches_filter(event)
    }

    fn matches_category(&self, event: &Event) -> bool {
        if self.category.is_empty() {
            return true;
        }
        Category::parse(&self.category).is_some_and(|category| event.category == category)
    }

    fn matches_filter(&self, event: &Event) -> bool {
        if self.filter.is_empty() {
            return true;
        }
        let needle = self.filter.to_lowercase();
        event.title.to_lowercase().contains(&needle) || event.venue.to_lowercase().contains(&needle)
    }
}
