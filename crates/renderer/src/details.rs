//! Text for the event dialog

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use timeline_shared::Event;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    pub title: String,
    pub venue: String,
    pub dates: String,
}

impl EventDetails {
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            venue: event.venue.clone(),
            dates: format_event_dates(event),
        }
    }
}

/// Human date range, collapsing whatever start and end share
pub fn format_event_dates(event: &Event) -> String {
    let (start, end) = (event.start, event.end);

    if start.date_naive() == end.date_naive() {
        format!(
            "{} – {}",
            start.format("%-d %B %Y, %-I:%M %p"),
            end.format("%-I:%M %p")
        )
    } else if start.year() == end.year() && start.month() == end.month() {
        format!("{}–{}", start.format("%-d"), end.format("%-d %B %Y"))
    } else if start.year() == end.year() {
        format!("{} – {}", start.format("%-d %B"), end.format("%-d %B %Y"))
    } else {
        format!("{} – {}", start.format("%-d %B %Y"), end.format("%-d %B %Y"))
    }
}
