//! Control point editor state machine
//!
//! Interprets one frame of pointer/keyboard input against the control
//! point set, then derives the curve geometry for the same frame. The
//! update always runs before regeneration, so the displayed curve
//! reflects the latest point positions with no one-frame lag.
//!
//! Interaction rules:
//! - delete mode held: a click removes the nearest point within the
//!   delete radius, and nothing is ever created or dragged;
//! - otherwise, pressing on an existing point captures it for dragging,
//!   pressing on empty space appends a new point at the pointer;
//! - while captured, the point follows the pointer and is painted with
//!   the drag highlight; releasing restores the active color.

use revolve_math::{bezier, chaikin, ColorGeometry, Vec3};
use revolve_input::FrameInput;

use crate::control_points::{ControlPointSet, ACTIVE_COLOR, DRAG_COLOR};
use crate::settings::{CurveKind, EditorSettings};

/// Color of the sampled curve
pub const CURVE_COLOR: Vec3 = Vec3::new(0.0, 0.0, 1.0);
/// Color of the line strip connecting the control points
pub const POLYGON_COLOR: Vec3 = Vec3::new(1.0, 0.0, 0.0);
/// Color of revolved surfaces
pub const SURFACE_COLOR: Vec3 = Vec3::new(0.0, 1.0, 1.0);

/// Drag capture state, cleared whenever the pointer is released
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    dragged: Option<usize>,
}

impl InteractionState {
    pub fn dragged(&self) -> Option<usize> {
        self.dragged
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }
}

/// Interactive editor over a [`ControlPointSet`]
#[derive(Clone, Debug, Default)]
pub struct CurveEditor {
    points: ControlPointSet,
    interaction: InteractionState,
}

impl CurveEditor {
    /// Create an editor with no control points
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor seeded with the default quad
    pub fn with_default_quad() -> Self {
        Self {
            points: ControlPointSet::default_quad(),
            interaction: InteractionState::default(),
        }
    }

    pub fn points(&self) -> &ControlPointSet {
        &self.points
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Clear the control points and the interaction state
    pub fn reset(&mut self) {
        self.points.clear();
        self.interaction = InteractionState::default();
        log::debug!("editor reset");
    }

    /// Run the interaction state machine for one frame
    pub fn update(&mut self, input: &FrameInput, settings: &EditorSettings) {
        if input.reset {
            self.reset();
            return;
        }

        if input.delete_mode {
            // No dragging while deleting; drop any stale capture first
            self.release_capture();
            if input.primary_pressed {
                self.delete_at(input.pointer, settings.delete_radius());
            }
            return;
        }

        if input.primary_held {
            if self.interaction.dragged.is_none() {
                match self.points.nearest_within(input.pointer, settings.hit_radius()) {
                    Some(index) => {
                        self.interaction.dragged = Some(index);
                        self.points.set_selected(index, true);
                        log::debug!("dragging control point {}", index);
                    }
                    None if input.primary_pressed => {
                        self.points.push(input.pointer, ACTIVE_COLOR);
                        log::debug!(
                            "created control point {} at ({:.3}, {:.3})",
                            self.points.len() - 1,
                            input.pointer.x,
                            input.pointer.y
                        );
                    }
                    None => {}
                }
            }
            if let Some(index) = self.interaction.dragged {
                self.points.set_position(index, input.pointer);
                self.points.set_color(index, DRAG_COLOR);
            }
        } else {
            self.release_capture();
        }
    }

    /// Restore the captured point, if any, and clear the capture
    fn release_capture(&mut self) {
        if let Some(index) = self.interaction.dragged.take() {
            self.points.set_color(index, ACTIVE_COLOR);
            self.points.set_selected(index, false);
        }
    }

    fn delete_at(&mut self, pointer: Vec3, radius: f32) {
        if let Some(index) = self.points.nearest_within(pointer, radius) {
            self.points.remove(index);
            log::debug!("deleted control point {}", index);
        }
    }

    /// Control points for rendering, with their current colors
    pub fn point_geometry(&self) -> ColorGeometry {
        self.points.point_geometry()
    }

    /// Control polygon line strip
    pub fn polygon_geometry(&self) -> ColorGeometry {
        self.points.polygon_geometry(POLYGON_COLOR)
    }

    /// Sampled curve for the current settings, rebuilt from scratch
    ///
    /// Fewer than 2 control points produce an empty curve.
    pub fn curve_geometry(&self, settings: &EditorSettings) -> ColorGeometry {
        let positions = self.points.positions();
        let samples = match settings.curve_kind {
            CurveKind::Bezier => bezier::sample(&positions, settings.resolution),
            CurveKind::BSpline => chaikin::smooth(&positions),
        };
        ColorGeometry::uniform(samples, CURVE_COLOR)
    }
}
