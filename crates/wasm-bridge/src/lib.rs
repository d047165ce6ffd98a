//! WASM Bridge crate for the venue timeline
//! Wires configuration, event data and the grid renderer into one controller
//! and exposes it to JavaScript

pub mod controller;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use controller::{
    anchor_from_millis, DialogVisibilityCallback, EventSelectedCallback, TimelineController,
};
