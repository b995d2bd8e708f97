//! Per-frame input snapshots
//!
//! The host event loop feeds raw winit events into an [`InputCollector`];
//! once per frame it takes an immediate [`FrameInput`] snapshot that the
//! editor and camera controller poll. Edge signals (press, reset, scroll)
//! are consumed by the snapshot, level signals (held buttons, modifier
//! keys) persist until the matching release event.

use revolve_math::Vec3;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

/// Polled input state for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer position in normalized viewport coordinates
    /// ([-1, 1] on each axis, y up, z = 0)
    pub pointer: Vec3,
    /// Primary button currently held
    pub primary_held: bool,
    /// Primary button went down this frame
    pub primary_pressed: bool,
    /// Scroll wheel movement accumulated this frame
    pub scroll: f32,
    /// Delete-mode modifier (Space) currently held
    pub delete_mode: bool,
    /// Reset requested this frame
    pub reset: bool,
}

/// Accumulates winit events into per-frame [`FrameInput`] snapshots
pub struct InputCollector {
    viewport: (f32, f32),
    pointer: Vec3,
    primary_held: bool,
    primary_pressed: bool,
    scroll: f32,
    delete_mode: bool,
    reset: bool,
}

impl InputCollector {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: (width.max(1) as f32, height.max(1) as f32),
            pointer: Vec3::ZERO,
            primary_held: false,
            primary_pressed: false,
            scroll: 0.0,
            delete_mode: false,
            reset: false,
        }
    }

    /// Track the viewport size used to normalize cursor positions
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width.max(1) as f32, height.max(1) as f32);
    }

    /// Process a cursor position in physical window pixels
    pub fn process_cursor(&mut self, x: f64, y: f64) {
        let (w, h) = self.viewport;
        self.pointer = Vec3::new(
            (x as f32 - 0.5 * w) / (0.5 * w),
            (0.5 * h - y as f32) / (0.5 * h),
            0.0,
        );
    }

    /// Process a mouse button event
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            let pressed = state == ElementState::Pressed;
            if pressed && !self.primary_held {
                self.primary_pressed = true;
            }
            self.primary_held = pressed;
        }
    }

    /// Process a keyboard event
    ///
    /// Returns true if the key is handled here (Space holds delete mode,
    /// R requests a reset).
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;
        match key {
            KeyCode::Space => {
                self.delete_mode = pressed;
                true
            }
            KeyCode::KeyR => {
                if pressed {
                    self.reset = true;
                }
                true
            }
            _ => false,
        }
    }

    /// Process scroll wheel movement
    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        match delta {
            MouseScrollDelta::LineDelta(_, y) => self.scroll += y,
            MouseScrollDelta::PixelDelta(pos) => self.scroll += pos.y as f32 / 100.0,
        }
    }

    /// Request a reset from outside the event stream (e.g. a panel button)
    pub fn request_reset(&mut self) {
        self.reset = true;
    }

    /// Take the snapshot for this frame and clear the edge signals
    pub fn end_frame(&mut self) -> FrameInput {
        let input = FrameInput {
            pointer: self.pointer,
            primary_held: self.primary_held,
            primary_pressed: self.primary_pressed,
            scroll: self.scroll,
            delete_mode: self.delete_mode,
            reset: self.reset,
        };
        self.primary_pressed = false;
        self.scroll = 0.0;
        self.reset = false;
        input
    }
}
