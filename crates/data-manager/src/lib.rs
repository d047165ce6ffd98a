//! Data Manager crate for the venue timeline
//! Owns the event source and the list the grid is currently showing

pub mod feed;
pub mod fixture;
pub mod query;
pub mod source;

use timeline_shared::{Event, TimelineResult};

pub use feed::{EventFeed, FetchTicket};
pub use fixture::fixture_events;
pub use query::EventQuery;
pub use source::{
    fetch_events, get_event, recent_events, EventSource, StaticEventSource, RECENT_EVENT_COUNT,
};

/// Main data manager that coordinates fetching and the visible list
pub struct DataManager<S: EventSource> {
    source: S,
    feed: EventFeed,
}

impl DataManager<StaticEventSource> {
    /// Manager over the bundled listings
    pub fn with_fixture() -> TimelineResult<Self> {
        Ok(Self::new(StaticEventSource::from_fixture()?))
    }
}

impl<S: EventSource> DataManager<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            feed: EventFeed::new(),
        }
    }

    /// Fetch for a new category/filter pair and apply the result
    ///
    /// Returns whether the visible list changed hands. Fetch errors are
    /// absorbed by the feed and show up as an empty list.
    pub async fn refresh(&mut self, query: EventQuery) -> bool {
        let ticket = self.feed.begin(query.clone());
        let result = self.source.fetch(&query).await;
        self.feed.resolve(ticket, result)
    }

    pub fn events(&self) -> &[Event] {
        self.feed.events()
    }

    pub fn feed(&self) -> &EventFeed {
        &self.feed
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
