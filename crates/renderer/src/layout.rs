//! Grid geometry: cell sizes, overscan and the initial scroll offset

use serde::{Deserialize, Serialize};
use timeline_axis::TimeAxis;
use timeline_shared::ViewportSize;

/// Pixel geometry the grid is laid out with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub viewport: ViewportSize,
    /// Width of the pinned venue column
    pub index_width: f64,
    pub column_width: f64,
    /// Height of every row, the sticky header row included
    pub row_height: f64,
    pub overscan_column_count: u32,
    pub overscan_row_count: u32,
}

impl GridLayout {
    pub fn new(viewport: ViewportSize, index_width: f64, column_width: f64, row_height: f64) -> Self {
        Self {
            viewport,
            index_width,
            column_width,
            row_height,
            overscan_column_count: 1,
            overscan_row_count: 1,
        }
    }

    pub fn with_overscan(mut self, columns: u32, rows: u32) -> Self {
        self.overscan_column_count = columns;
        self.overscan_row_count = rows;
        self
    }

    pub fn with_viewport(mut self, viewport: ViewportSize) -> Self {
        self.viewport = viewport;
        self
    }

    /// Viewport width left for body columns
    pub fn body_width(&self) -> f64 {
        (self.viewport.width - self.index_width).max(0.0)
    }

    /// Viewport height left for body rows
    pub fn body_height(&self) -> f64 {
        (self.viewport.height - self.row_height).max(0.0)
    }

    /// Full scrollable content width, index column included
    pub fn content_width(&self, column_count: u32) -> f64 {
        self.index_width + column_count as f64 * self.column_width
    }

    /// Full scrollable content height, header row included
    pub fn content_height(&self, row_count: usize) -> f64 {
        (row_count as f64 + 1.0) * self.row_height
    }

    /// Scroll offset placing the anchor column in the middle of the body
    pub fn initial_scroll_left(&self, axis: &TimeAxis) -> f64 {
        let anchor_left = axis.anchor_column() * self.column_width;
        (anchor_left - self.body_width() / 2.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use timeline_shared::View;

    fn axis(view: View) -> TimeAxis {
        TimeAxis::new(view, Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0).unwrap())
    }

    fn layout() -> GridLayout {
        GridLayout::new(ViewportSize::new(1200.0, 600.0), 240.0, 120.0, 60.0)
    }

    #[test]
    fn test_body_size() {
        let layout = layout();
        assert_eq!(layout.body_width(), 960.0);
        assert_eq!(layout.body_height(), 540.0);
    }

    #[test]
    fn test_content_extent() {
        let layout = layout();
        assert_eq!(layout.content_width(12), 240.0 + 12.0 * 120.0);
        assert_eq!(layout.content_height(5), 360.0);
    }

    #[test]
    fn test_initial_scroll_centers_anchor() {
        let layout = layout();
        // Day view anchor column 183, body 960 wide
        assert_eq!(layout.initial_scroll_left(&axis(View::Day)), 183.0 * 120.0 - 480.0);
        // Month view anchor column 6 is 720px in, still past half the body
        assert_eq!(layout.initial_scroll_left(&axis(View::Month)), 240.0);
    }

    #[test]
    fn test_initial_scroll_never_negative() {
        let layout = GridLayout::new(ViewportSize::new(4000.0, 600.0), 240.0, 120.0, 60.0);
        assert_eq!(layout.initial_scroll_left(&axis(View::Month)), 0.0);
    }

    #[test]
    fn test_body_never_negative() {
        let layout = GridLayout::new(ViewportSize::new(200.0, 40.0), 240.0, 120.0, 60.0);
        assert_eq!(layout.body_width(), 0.0);
        assert_eq!(layout.body_height(), 0.0);
    }
}
