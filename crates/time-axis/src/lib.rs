//! Time axis coordinate mapping for the venue timeline
//!
//! Converts between fractional column indices and UTC instants for the
//! hour, day and month granularities. Column `view.offset_index()` is the
//! anchor: the start of the anchor's hour, day or month.
//!
//! Nothing here clamps to the nominal `[0, column_count]` range; indices and
//! dates outside it map consistently and clipping is left to the renderer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use timeline_shared::View;

pub mod calendar;

use calendar::{
    add_fractional_months, micros_between, month_ordinal, month_start, offset_micros,
    start_of_day, start_of_hour, start_of_month, MICROS_PER_DAY, MICROS_PER_HOUR,
};

/// Maps columns to dates and back for one `(view, anchor)` pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeAxis {
    view: View,
    anchor: DateTime<Utc>,
}

impl TimeAxis {
    pub fn new(view: View, anchor: DateTime<Utc>) -> Self {
        Self { view, anchor }
    }

    /// Same anchor, different granularity
    pub fn with_view(&self, view: View) -> Self {
        Self {
            view,
            anchor: self.anchor,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    pub fn column_count(&self) -> u32 {
        self.view.column_count()
    }

    /// Column the anchor's truncated instant maps to
    pub fn anchor_column(&self) -> f64 {
        self.view.offset_index()
    }

    /// The anchor truncated to the view's granularity
    pub fn origin(&self) -> DateTime<Utc> {
        match self.view {
            View::Hour => start_of_hour(self.anchor),
            View::Day => start_of_day(self.anchor),
            View::Month => start_of_month(self.anchor),
        }
    }

    /// Fractional column of an instant.
    ///
    /// Hour and day views are linear in time. The month view counts whole
    /// calendar months from the anchor month and adds the elapsed share of
    /// the target month, so months of different lengths all span one column.
    pub fn column_index_of(&self, date: DateTime<Utc>) -> f64 {
        let offset = self.view.offset_index();
        match self.view {
            View::Hour => offset + micros_between(self.origin(), date) / MICROS_PER_HOUR,
            View::Day => offset + micros_between(self.origin(), date) / MICROS_PER_DAY,
            View::Month => {
                let target = month_ordinal(date);
                let whole_months = target - month_ordinal(self.anchor);
                let month_begin = month_start(target);
                let month_length = micros_between(month_begin, month_start(target + 1));
                let elapsed = micros_between(month_begin, date);
                offset + whole_months as f64 + elapsed / month_length
            }
        }
    }

    /// Instant at a fractional column; inverse of [`TimeAxis::column_index_of`]
    pub fn date_of(&self, column_index: f64) -> DateTime<Utc> {
        let relative = column_index - self.view.offset_index();
        match self.view {
            View::Hour => offset_micros(self.origin(), relative * MICROS_PER_HOUR),
            View::Day => offset_micros(self.origin(), relative * MICROS_PER_DAY),
            View::Month => add_fractional_months(self.origin(), relative),
        }
    }

    /// Short column header: `"3 PM"`, `"Tue 14"` or `"Oct"`
    pub fn header_label_of(&self, column_index: f64) -> String {
        let date = self.date_of(column_index);
        let pattern = match self.view {
            View::Hour => "%-I %p",
            View::Day => "%a %-d",
            View::Month => "%b",
        };
        date.format(pattern).to_string()
    }

    /// Coarser context label for the corner cell: full date, month and
    /// year, or year
    pub fn section_label_of(&self, column_index: f64) -> String {
        let date = self.date_of(column_index);
        let pattern = match self.view {
            View::Hour => "%-d %b %Y",
            View::Day => "%b %Y",
            View::Month => "%Y",
        };
        date.format(pattern).to_string()
    }
}
