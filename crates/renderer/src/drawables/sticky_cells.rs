//! Pinned header row, index column and corner cell
//!
//! Rects are in content space with the sticky offset already applied: the
//! header row sits at the current `scroll.top`, the index column at
//! `scroll.left`. The first cell of a run also carries a leading margin
//! equal to its absolute offset so flow-layout hosts can render the run
//! contiguously from mid-range.

use serde::{Deserialize, Serialize};
use timeline_axis::TimeAxis;
use timeline_shared::{Rect, ScrollPosition};

use crate::culling::VisibleWindow;
use crate::layout::GridLayout;
use crate::venues::VenueIndex;

const CORNER_Z_INDEX: u8 = 30;
const STICKY_Z_INDEX: u8 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickyCell {
    /// Grid row, 0 is the header row
    pub row: u32,
    /// Grid column, 0 is the index column
    pub column: u32,
    pub label: String,
    pub rect: Rect,
    pub margin: Option<f64>,
    pub z_index: u8,
}

/// Top-left cell, labelled with the section the window starts in
pub fn corner_cell(
    axis: &TimeAxis,
    window: &VisibleWindow,
    layout: &GridLayout,
    scroll: ScrollPosition,
) -> StickyCell {
    StickyCell {
        row: 0,
        column: 0,
        label: axis.section_label_of(window.from_column),
        rect: Rect::new(scroll.left, scroll.top, layout.index_width, layout.row_height),
        margin: None,
        z_index: CORNER_Z_INDEX,
    }
}

pub fn header_cells(
    axis: &TimeAxis,
    window: &VisibleWindow,
    layout: &GridLayout,
    scroll: ScrollPosition,
) -> Vec<StickyCell> {
    let columns = window.column_range(axis.column_count());
    let first = columns.start;

    columns
        .map(|column| {
            let offset = layout.column_width * column as f64;
            StickyCell {
                row: 0,
                column: column + 1,
                label: axis.header_label_of(column as f64),
                rect: Rect::new(
                    layout.index_width + offset,
                    scroll.top,
                    layout.column_width,
                    layout.row_height,
                ),
                margin: (column == first).then_some(offset),
                z_index: STICKY_Z_INDEX,
            }
        })
        .collect()
}

pub fn index_cells(
    venues: &VenueIndex,
    window: &VisibleWindow,
    layout: &GridLayout,
    scroll: ScrollPosition,
) -> Vec<StickyCell> {
    let rows = window.row_range(venues.len());
    let first = rows.start;

    rows.filter_map(|row| {
        let name = venues.name_at(row as usize)?;
        let offset = layout.row_height * row as f64;
        Some(StickyCell {
            row: row + 1,
            column: 0,
            label: name.to_string(),
            rect: Rect::new(
                scroll.left,
                layout.row_height + offset,
                layout.index_width,
                layout.row_height,
            ),
            margin: (row == first).then_some(offset),
            z_index: STICKY_Z_INDEX,
        })
    })
    .collect()
}
