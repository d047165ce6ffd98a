//! Input events the grid controller reacts to

use crate::{ScrollPosition, View, ViewportSize};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalPosition {
    pub x: f64,
    pub y: f64,
}

impl PhysicalPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridInput {
    /// The scroll container moved
    Scroll { position: ScrollPosition },
    /// The container was resized
    Resize { size: ViewportSize },
    /// Pointer activation, in viewport coordinates (0,0 is the corner cell)
    Click { position: PhysicalPosition },
    /// Sidebar switched the time granularity
    SetView { view: View },
    /// The event dialog was closed
    DismissDialog,
}
