//! Virtualized grid renderer for the venue timeline
//!
//! Given the scroll offset, the viewport geometry and the event list, this
//! crate decides which header cells, venue cells and event bars exist in a
//! frame and where they go. A frame is a pure function of its inputs; the
//! host calls [`render_frame`] on every scroll tick, resize, view switch or
//! event-list change and simply draws what comes back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use timeline_axis::TimeAxis;
use timeline_shared::{Event, ScrollPosition};

pub mod culling;
pub mod details;
pub mod drawables;
pub mod layout;
pub mod styles;
pub mod venues;

pub use culling::VisibleWindow;
pub use details::{format_event_dates, EventDetails};
pub use drawables::{EventBar, StickyCell};
pub use layout::GridLayout;
pub use styles::{BarStyle, CategoryStyles};
pub use venues::{derive_venues, VenueIndex};

/// Everything one frame depends on
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub axis: &'a TimeAxis,
    pub layout: &'a GridLayout,
    pub scroll: ScrollPosition,
    pub events: &'a [Event],
    pub venues: &'a VenueIndex,
    pub styles: &'a CategoryStyles,
}

/// The materialized part of the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridFrame {
    pub window: VisibleWindow,
    pub corner: StickyCell,
    pub header_cells: Vec<StickyCell>,
    pub index_cells: Vec<StickyCell>,
    pub bars: Vec<EventBar>,
    /// Instant under the middle of the window
    pub current_date: DateTime<Utc>,
    pub content_width: f64,
    pub content_height: f64,
}

impl GridFrame {
    /// Topmost bar containing a content-space point
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&EventBar> {
        self.bars.iter().rev().find(|bar| bar.rect.contains(x, y))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub fn render_frame(input: &FrameInput<'_>) -> GridFrame {
    let FrameInput {
        axis,
        layout,
        scroll,
        events,
        venues,
        styles,
    } = *input;

    let scroll = scroll.clamped();
    let window = VisibleWindow::compute(scroll, layout);
    let current_date = axis.date_of(window.centre_column());

    log::debug!(
        "Grid: {} columns {:.2}..{:.2}, rows {:.2}..{:.2}, centred on {}",
        axis.view(),
        window.from_column,
        window.to_column,
        window.from_row,
        window.to_row,
        current_date
    );

    let corner = drawables::corner_cell(axis, &window, layout, scroll);
    let header_cells = drawables::header_cells(axis, &window, layout, scroll);
    let index_cells = drawables::index_cells(venues, &window, layout, scroll);
    let bars = drawables::layout_event_bars(events, venues, axis, &window, layout, styles);

    GridFrame {
        window,
        corner,
        header_cells,
        index_cells,
        bars,
        current_date,
        content_width: layout.content_width(axis.column_count()),
        content_height: layout.content_height(venues.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use timeline_shared::{Category, View, ViewportSize};

    #[test]
    fn test_hit_test_prefers_topmost() {
        let anchor = Utc.with_ymd_and_hms(2024, 10, 15, 0, 0, 0).unwrap();
        let axis = TimeAxis::new(View::Day, anchor);
        let layout = GridLayout::new(ViewportSize::new(720.0, 300.0), 240.0, 120.0, 60.0);
        let start = Utc.with_ymd_and_hms(2024, 10, 15, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 10, 17, 0, 0, 0).unwrap();
        let events = vec![
            Event::new("first", Category::Art, "Roundhouse", start, end),
            Event::new("second", Category::Music, "Roundhouse", start, end),
        ];
        let venues = VenueIndex::from_events(&events);
        let styles = CategoryStyles::default();
        let frame = render_frame(&FrameInput {
            axis: &axis,
            layout: &layout,
            scroll: ScrollPosition::new(183.0 * 120.0, 0.0),
            events: &events,
            venues: &venues,
            styles: &styles,
        });

        let x = 240.0 + 183.5 * 120.0;
        let hit = frame.hit_test(x, 90.0).unwrap();
        assert_eq!(hit.title, "second");
        assert!(frame.hit_test(x, 10.0).is_none());
    }

    #[test]
    fn test_content_extent() {
        let anchor = Utc.with_ymd_and_hms(2024, 10, 15, 0, 0, 0).unwrap();
        let axis = TimeAxis::new(View::Month, anchor);
        let layout = GridLayout::new(ViewportSize::new(720.0, 300.0), 240.0, 120.0, 60.0);
        let venues = VenueIndex::default();
        let styles = CategoryStyles::default();
        let frame = render_frame(&FrameInput {
            axis: &axis,
            layout: &layout,
            scroll: ScrollPosition::default(),
            events: &[],
            venues: &venues,
            styles: &styles,
        });

        assert_eq!(frame.content_width, 240.0 + 12.0 * 120.0);
        assert_eq!(frame.content_height, 60.0);
        assert!(frame.bars.is_empty());
        assert!(frame.index_cells.is_empty());
        assert_eq!(frame.header_cells.len(), 4);
    }
}
