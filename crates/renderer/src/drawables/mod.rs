//! Everything the grid materializes for one frame

pub mod event_bars;
pub mod sticky_cells;

pub use event_bars::{layout_event_bars, EventBar};
pub use sticky_cells::{corner_cell, header_cells, index_cells, StickyCell};
