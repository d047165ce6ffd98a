//! Shared types for the venue timeline
//!
//! This crate contains all types that are shared between the time axis,
//! renderer, data manager and wasm-bridge crates. Nothing in here knows how
//! to map time onto columns; it only describes events, views and geometry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod errors;
pub mod events;
pub mod store_state;

pub use errors::{ErrorResponse, TimelineError, TimelineResult};

/// Listing category of an event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Art,
    Music,
    Theatre,
    /// Anything the data source sends that is not one of the known listings
    #[serde(other)]
    Unknown,
}

impl Category {
    /// All categories a listing can legitimately carry
    pub const KNOWN: [Category; 3] = [Category::Art, Category::Music, Category::Theatre];

    /// Exact-match parse of a category name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Art" => Some(Category::Art),
            "Music" => Some(Category::Music),
            "Theatre" => Some(Category::Theatre),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Art => "Art",
            Category::Music => "Music",
            Category::Theatre => "Theatre",
            Category::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scheduled listing at a venue
///
/// `start <= end` is expected but not enforced; the renderer copes with
/// inverted intervals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub title: String,
    pub category: Category,
    pub venue: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        category: Category,
        venue: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            category,
            venue: venue.into(),
            start,
            end,
        }
    }

    /// True when the end lies before the start
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}

/// Granularity of the time axis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum View {
    Hour,
    #[default]
    Day,
    Month,
}

impl View {
    pub const ALL: [View; 3] = [View::Hour, View::Day, View::Month];

    /// Total column budget, roughly a year centered on the anchor
    pub fn column_count(&self) -> u32 {
        match self {
            View::Hour => 365 * 24,
            View::Day => 366,
            View::Month => 12,
        }
    }

    /// Column at which the anchor date sits
    pub fn offset_index(&self) -> f64 {
        self.column_count() as f64 / 2.0
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Hour" => Some(View::Hour),
            "Day" => Some(View::Day),
            "Month" => Some(View::Month),
            _ => None,
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Hour => write!(f, "Hour"),
            View::Day => write!(f, "Day"),
            View::Month => write!(f, "Month"),
        }
    }
}

/// Scroll offset of the grid body in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ScrollPosition {
    pub left: f64,
    pub top: f64,
}

impl ScrollPosition {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Negative or non-finite offsets collapse to zero
    pub fn clamped(self) -> Self {
        let fix = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            left: fix(self.left),
            top: fix(self.top),
        }
    }
}

/// Outer size of the grid viewport in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned pixel rectangle in grid content space
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }
}
