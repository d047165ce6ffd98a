//! Viewport culling for the virtualized grid
//!
//! All ranges here are in fractional column/row units. Intervals are
//! half-open: an event ending exactly where the window starts is not visible.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use timeline_shared::ScrollPosition;

use crate::layout::GridLayout;

/// Body cells currently inside the viewport, sticky cells excluded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibleWindow {
    pub from_column: f64,
    pub to_column: f64,
    pub from_row: f64,
    pub to_row: f64,
}

impl VisibleWindow {
    pub fn compute(scroll: ScrollPosition, layout: &GridLayout) -> Self {
        let scroll = scroll.clamped();
        Self {
            from_column: scroll.left / layout.column_width,
            to_column: (scroll.left + layout.body_width()) / layout.column_width,
            from_row: scroll.top / layout.row_height,
            to_row: (scroll.top + layout.body_height()) / layout.row_height,
        }
    }

    /// Integer columns that need a header cell
    pub fn column_range(&self, column_count: u32) -> Range<u32> {
        integer_range(self.from_column, self.to_column, column_count as usize)
    }

    /// Integer rows that need an index cell
    pub fn row_range(&self, row_count: usize) -> Range<u32> {
        integer_range(self.from_row, self.to_row, row_count)
    }

    /// Column in the middle of the window
    pub fn centre_column(&self) -> f64 {
        (self.from_column + self.to_column) / 2.0
    }

    /// Does body row `row` (0-based) fall inside the window plus overscan?
    ///
    /// Bars are placed by grid row, one past the body row because of the
    /// header, and that grid row must lie in `[from_row - o, to_row + o]`.
    pub fn row_visible(&self, row: usize, overscan_rows: u32) -> bool {
        let overscan = overscan_rows as f64;
        let grid_row = row as f64 + 1.0;
        grid_row >= self.from_row - overscan && grid_row <= self.to_row + overscan
    }
}

fn integer_range(from: f64, to: f64, count: usize) -> Range<u32> {
    let start = from.floor().max(0.0) as u32;
    let end = to.ceil().max(0.0).min(count as f64) as u32;
    start..end.max(start)
}

/// An event's extent on the column axis, start <= end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpan {
    pub start: f64,
    pub end: f64,
}

impl ColumnSpan {
    /// Builds a span, swapping inverted bounds. The flag reports the swap.
    pub fn ordered(start: f64, end: f64) -> (Self, bool) {
        if end < start {
            (Self { start: end, end: start }, true)
        } else {
            (Self { start, end }, false)
        }
    }
}

/// Result of clipping a span against the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarClip {
    pub visible_start: f64,
    pub visible_end: f64,
    /// Overscan share of the bar left of the viewport, in columns
    pub padding_left: f64,
    /// Overscan share of the bar right of the viewport, in columns
    pub padding_right: f64,
    pub is_full_width: bool,
}

/// Clip a span to the window plus column overscan.
///
/// Returns `None` when nothing of the span is on screen.
pub fn clip_span(
    span: ColumnSpan,
    window: &VisibleWindow,
    overscan_columns: u32,
    column_count: u32,
) -> Option<BarClip> {
    if !span.start.is_finite() || !span.end.is_finite() {
        return None;
    }

    let overscan = overscan_columns as f64;
    let visible_start = span.start.max(window.from_column - overscan).max(0.0);
    let visible_end = span
        .end
        .min(window.to_column + overscan)
        .min(column_count as f64);

    if visible_start >= visible_end
        || span.start >= window.to_column
        || span.end <= window.from_column
    {
        return None;
    }

    let padding_left = if visible_start < window.from_column {
        window.from_column - visible_start
    } else {
        0.0
    };
    let padding_right = if visible_end > window.to_column {
        visible_end - window.to_column
    } else {
        0.0
    };

    Some(BarClip {
        visible_start,
        visible_end,
        padding_left,
        padding_right,
        is_full_width: span.start <= window.from_column && span.end >= window.to_column,
    })
}
