//! Stale-while-loading event list
//!
//! The grid keeps drawing the last resolved list while a new fetch is in
//! flight. Every fetch is tagged with a ticket; only the newest ticket may
//! replace the list, so a slow response for an old query can never
//! overwrite a faster response for a newer one.

use serde::{Deserialize, Serialize};
use timeline_shared::{Event, TimelineResult};

use crate::query::EventQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct EventFeed {
    events: Vec<Event>,
    /// Query the current list answers
    query: Option<EventQuery>,
    /// Query of the newest fetch
    pending: Option<EventQuery>,
    issued: u64,
    applied: u64,
}

impl EventFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new fetch. Earlier tickets become stale.
    pub fn begin(&mut self, query: EventQuery) -> FetchTicket {
        self.issued += 1;
        log::debug!(
            "Fetch #{} started for category {:?}, filter {:?}",
            self.issued,
            query.category,
            query.filter
        );
        self.pending = Some(query);
        FetchTicket(self.issued)
    }

    /// Apply the outcome of a fetch. Returns whether the list was replaced.
    ///
    /// A failure resolves to an empty list; the error never leaves the feed.
    pub fn resolve(&mut self, ticket: FetchTicket, result: TimelineResult<Vec<Event>>) -> bool {
        if ticket.0 != self.issued {
            log::debug!(
                "Dropping fetch #{}, superseded by #{}",
                ticket.0,
                self.issued
            );
            return false;
        }

        self.events = match result {
            Ok(events) => events,
            Err(e) => {
                log::warn!("Fetch #{} failed, showing no events: {e}", ticket.0);
                Vec::new()
            }
        };
        self.query = self.pending.take();
        self.applied = ticket.0;
        true
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn query(&self) -> Option<&EventQuery> {
        self.query.as_ref()
    }

    /// A fetch has been issued that has not resolved yet
    pub fn is_loading(&self) -> bool {
        self.applied < self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use timeline_shared::{Category, TimelineError};

    fn listing(title: &str) -> Event {
        let at = Utc.with_ymd_and_hms(2024, 11, 1, 19, 0, 0).unwrap();
        Event::new(title, Category::Music, "Roundhouse", at, at)
    }

    #[test]
    fn test_previous_events_stay_while_loading() {
        let mut feed = EventFeed::new();
        let first = feed.begin(EventQuery::all());
        assert!(feed.resolve(first, Ok(vec![listing("a")])));

        let _second = feed.begin(EventQuery::new("Music", ""));
        assert!(feed.is_loading());
        assert_eq!(feed.events().len(), 1);
        assert_eq!(feed.query(), Some(&EventQuery::all()));
    }

    #[test]
    fn test_stale_ticket_is_dropped() {
        let mut feed = EventFeed::new();
        let older = feed.begin(EventQuery::new("", "lib"));
        let newer = feed.begin(EventQuery::new("", "libertines"));

        assert!(feed.resolve(newer, Ok(vec![listing("newer")])));
        assert!(!feed.resolve(older, Ok(vec![listing("older")])));
        assert_eq!(feed.events()[0].title, "newer");
        assert_eq!(feed.query(), Some(&EventQuery::new("", "libertines")));
        assert!(!feed.is_loading());
    }

    #[test]
    fn test_failure_resolves_to_empty_list() {
        let mut feed = EventFeed::new();
        let first = feed.begin(EventQuery::all());
        feed.resolve(first, Ok(vec![listing("a")]));

        let second = feed.begin(EventQuery::all());
        let failure = Err(TimelineError::DataFetch {
            message: "offline".to_string(),
        });
        assert!(feed.resolve(second, failure));
        assert!(feed.events().is_empty());
    }
}
