//! Event bars: one per visible event, clipped to the window plus overscan

use serde::{Deserialize, Serialize};
use timeline_axis::TimeAxis;
use timeline_shared::{Event, Rect};

use crate::culling::{clip_span, ColumnSpan, VisibleWindow};
use crate::layout::GridLayout;
use crate::styles::{BarStyle, CategoryStyles};
use crate::venues::VenueIndex;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBar {
    /// Position of the event in the list the frame was built from
    pub event_index: usize,
    pub title: String,
    /// Grid row, 1-based because row 0 is the header
    pub row: u32,
    pub rect: Rect,
    /// Inner padding in pixels covering the part of the bar that lies in
    /// overscan, so the label stays centred on the on-screen part
    pub padding_left: f64,
    pub padding_right: f64,
    /// The event covers the whole window on both sides
    pub is_full_width: bool,
    /// `end` was before `start`; laid out over the swapped interval
    pub degenerate: bool,
    pub style: BarStyle,
}

pub fn layout_event_bars(
    events: &[Event],
    venues: &VenueIndex,
    axis: &TimeAxis,
    window: &VisibleWindow,
    layout: &GridLayout,
    styles: &CategoryStyles,
) -> Vec<EventBar> {
    let column_count = axis.column_count();

    events
        .iter()
        .enumerate()
        .filter_map(|(event_index, event)| {
            let Some(row) = venues.row_of(&event.venue) else {
                log::trace!("Grid: skipping {:?}, venue {:?} has no row", event.title, event.venue);
                return None;
            };
            if !window.row_visible(row, layout.overscan_row_count) {
                return None;
            }

            let (span, degenerate) = ColumnSpan::ordered(
                axis.column_index_of(event.start),
                axis.column_index_of(event.end),
            );
            if degenerate {
                log::debug!("Grid: event {:?} ends before it starts", event.title);
            }

            let clip = clip_span(span, window, layout.overscan_column_count, column_count)?;

            let grid_row = row as u32 + 1;
            let rect = Rect::new(
                layout.index_width + clip.visible_start * layout.column_width,
                grid_row as f64 * layout.row_height + layout.row_height / 4.0,
                (clip.visible_end - clip.visible_start) * layout.column_width,
                layout.row_height / 2.0,
            );

            Some(EventBar {
                event_index,
                title: event.title.clone(),
                row: grid_row,
                rect,
                padding_left: clip.padding_left * layout.column_width,
                padding_right: clip.padding_right * layout.column_width,
                is_full_width: clip.is_full_width,
                degenerate,
                style: styles.resolve(event.category, degenerate).clone(),
            })
        })
        .collect()
}
