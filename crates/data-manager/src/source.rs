//! Event sources and the lookups built on top of them

use futures::future::{self, BoxFuture, FutureExt};
use timeline_shared::{Event, TimelineError, TimelineResult};

use crate::fixture::fixture_events;
use crate::query::EventQuery;

/// Anything that can answer an [`EventQuery`]
///
/// Result order carries no meaning; the grid derives its own venue order.
pub trait EventSource {
    fn fetch<'a>(&'a self, query: &'a EventQuery) -> BoxFuture<'a, TimelineResult<Vec<Event>>>;
}

/// In-memory source filtering a fixed list of events
#[derive(Debug, Clone, Default)]
pub struct StaticEventSource {
    events: Vec<Event>,
}

impl StaticEventSource {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Source over the bundled London listings
    pub fn from_fixture() -> TimelineResult<Self> {
        Ok(Self::new(fixture_events()?))
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    fn select(&self, query: &EventQuery) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| query.matches(event))
            .cloned()
            .collect()
    }
}

impl EventSource for StaticEventSource {
    fn fetch<'a>(&'a self, query: &'a EventQuery) -> BoxFuture<'a, TimelineResult<Vec<Event>>> {
        future::ready(Ok(self.select(query))).boxed()
    }
}

/// Fetch with plain category and filter strings
pub async fn fetch_events<S>(source: &S, category: &str, filter: &str) -> TimelineResult<Vec<Event>>
where
    S: EventSource + ?Sized,
{
    source.fetch(&EventQuery::new(category, filter)).await
}

/// First event carrying exactly this title
pub async fn get_event<S>(source: &S, title: &str) -> TimelineResult<Event>
where
    S: EventSource + ?Sized,
{
    source
        .fetch(&EventQuery::all())
        .await?
        .into_iter()
        .find(|event| event.title == title)
        .ok_or_else(|| TimelineError::EventNotFound {
            title: title.to_string(),
        })
}

/// Number of events [`recent_events`] returns
pub const RECENT_EVENT_COUNT: usize = 10;

/// Leading slice of the unfiltered list
pub async fn recent_events<S>(source: &S) -> TimelineResult<Vec<Event>>
where
    S: EventSource + ?Sized,
{
    let mut events = source.fetch(&EventQuery::all()).await?;
    events.truncate(RECENT_EVENT_COUNT);
    Ok(events)
}
