//! Integration tests for the data manager

use futures::future::{self, BoxFuture, FutureExt};
use std::collections::BTreeSet;
use timeline_data::{
    fetch_events, get_event, recent_events, DataManager, EventQuery, EventSource,
    StaticEventSource,
};
use timeline_shared::{Category, Event, TimelineError, TimelineResult};

fn fixture() -> StaticEventSource {
    StaticEventSource::from_fixture().unwrap()
}

fn venues(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .map(|e| e.venue.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[tokio::test]
async fn test_fetch_everything() {
    let events = fetch_events(&fixture(), "", "").await.unwrap();
    assert_eq!(events.len(), 28);
}

#[tokio::test]
async fn test_fetch_music() {
    let events = fetch_events(&fixture(), "Music", "").await.unwrap();
    assert_eq!(events.len(), 7);
    assert!(events.iter().all(|e| e.category == Category::Music));
    assert_eq!(
        venues(&events),
        vec![
            "Cadogan Hall",
            "O2 Arena",
            "O2 Brixton Academy",
            "Roundhouse",
            "Royal Albert Hall"
        ]
    );
}

#[tokio::test]
async fn test_filter_libertines() {
    let events = fetch_events(&fixture(), "", "libertines").await.unwrap();
    assert_eq!(events.len(), 3);
    assert!(events
        .iter()
        .all(|e| e.title == "The Libertines" && e.venue == "Roundhouse"));
}

#[tokio::test]
async fn test_filter_matches_titles_and_venues() {
    let events = fetch_events(&fixture(), "", "royal").await.unwrap();
    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Michael Craig-Martin",
            "Royal Philharmonic Orchestra",
            "Avatar Live in Concert"
        ]
    );
}

#[tokio::test]
async fn test_unknown_category_matches_nothing() {
    let events = fetch_events(&fixture(), "Dance", "").await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_get_event_by_title() {
    let source = fixture();
    let event = get_event(&source, "The Mousetrap").await.unwrap();
    assert_eq!(event.venue, "St. Martin’s Theatre");

    let missing = get_event(&source, "the mousetrap").await.unwrap_err();
    assert_eq!(
        missing,
        TimelineError::EventNotFound {
            title: "the mousetrap".to_string()
        }
    );
}

#[tokio::test]
async fn test_recent_events() {
    let events = recent_events(&fixture()).await.unwrap();
    assert_eq!(events.len(), 10);
    assert_eq!(events[0].venue, "Gagosian, Davies Street");
}

struct FailingSource;

impl EventSource for FailingSource {
    fn fetch<'a>(&'a self, _query: &'a EventQuery) -> BoxFuture<'a, TimelineResult<Vec<Event>>> {
        future::ready(Err(TimelineError::DataFetch {
            message: "listings service unavailable".to_string(),
        }))
        .boxed()
    }
}

#[tokio::test]
async fn test_failed_refresh_shows_empty_list() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut manager = DataManager::new(FailingSource);
    assert!(manager.refresh(EventQuery::all()).await);
    assert!(manager.events().is_empty());
    assert!(!manager.feed().is_loading());
}

#[tokio::test]
async fn test_refresh_replaces_list() {
    let mut manager = DataManager::with_fixture().unwrap();
    manager.refresh(EventQuery::all()).await;
    assert_eq!(manager.events().len(), 28);

    manager.refresh(EventQuery::new("Theatre", "")).await;
    assert_eq!(manager.events().len(), 10);
    assert_eq!(
        manager.feed().query(),
        Some(&EventQuery::new("Theatre", ""))
    );
}
