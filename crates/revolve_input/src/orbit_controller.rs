//! Turntable camera controller
//!
//! Translates pointer drags and scroll wheel movement into orbit and zoom
//! commands on any camera implementing [`OrbitControl`]. Dragging is
//! anchored to the position where the button went down, so each frame
//! applies only the movement since the previous one.

use revolve_math::Vec3;

use crate::FrameInput;

/// Trait for cameras the controller can drive
///
/// Allows the controller to work with different camera implementations.
pub trait OrbitControl {
    /// Rotate around the target by the given azimuth/elevation deltas (radians)
    fn orbit(&mut self, delta_theta: f32, delta_phi: f32);
    /// Move toward (negative) or away from (positive) the target
    fn zoom(&mut self, delta: f32);
    /// Current camera position
    fn position(&self) -> Vec3;
}

/// Pointer-driven controller for a turntable camera
pub struct OrbitController {
    dragging: bool,
    anchor: Vec3,

    // Configuration
    pub orbit_sensitivity: f32,
    pub zoom_step: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitController {
    pub fn new() -> Self {
        Self {
            dragging: false,
            anchor: Vec3::ZERO,
            orbit_sensitivity: 1.5,
            zoom_step: 0.5,
        }
    }

    /// Builder: set orbit sensitivity (radians per normalized viewport unit)
    pub fn with_orbit_sensitivity(mut self, sensitivity: f32) -> Self {
        self.orbit_sensitivity = sensitivity;
        self
    }

    /// Builder: set zoom step per scroll unit
    pub fn with_zoom_step(mut self, step: f32) -> Self {
        self.zoom_step = step;
        self
    }

    /// Apply this frame's input to the camera
    ///
    /// Returns the camera position for debug display.
    pub fn update<C: OrbitControl>(&mut self, camera: &mut C, input: &FrameInput) -> Vec3 {
        if input.primary_held {
            if !self.dragging {
                self.dragging = true;
                self.anchor = input.pointer;
            }
            let delta = input.pointer - self.anchor;
            camera.orbit(
                delta.x * self.orbit_sensitivity,
                delta.y * self.orbit_sensitivity,
            );
            self.anchor = input.pointer;
        } else {
            self.dragging = false;
        }

        if input.scroll != 0.0 {
            camera.zoom(-input.scroll * self.zoom_step);
        }

        camera.position()
    }

    /// Whether a drag is currently in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}
