//! Bundled London listings used as the default event source

use timeline_shared::{Event, TimelineResult};

const LISTINGS_JSON: &str = include_str!("../data/listings.json");

/// Parse the bundled listings, in their published order
pub fn fixture_events() -> TimelineResult<Vec<Event>> {
    let events: Vec<Event> = serde_json::from_str(LISTINGS_JSON)?;
    log::debug!("Loaded {} bundled listings", events.len());
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use timeline_shared::Category;

    #[test]
    fn test_fixture_parses() {
        let events = fixture_events().unwrap();
        assert_eq!(events.len(), 28);

        let count = |category| events.iter().filter(|e| e.category == category).count();
        assert_eq!(count(Category::Art), 11);
        assert_eq!(count(Category::Music), 7);
        assert_eq!(count(Category::Theatre), 10);
        assert!(events.iter().all(|e| !e.is_inverted()));
    }

    #[test]
    fn test_fixture_timestamps_are_utc() {
        let events = fixture_events().unwrap();
        let orchestra = events
            .iter()
            .find(|e| e.title == "Royal Philharmonic Orchestra")
            .unwrap();
        assert_eq!(orchestra.start.to_rfc3339(), "2024-10-30T19:30:00+00:00");
    }
}
