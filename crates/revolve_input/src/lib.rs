//! Input handling for the Revolve editor
//!
//! This crate translates host window events into per-frame polled input
//! snapshots and drives turntable-style camera control.

mod frame_input;
mod orbit_controller;

pub use frame_input::{FrameInput, InputCollector};
pub use orbit_controller::{OrbitControl, OrbitController};
