//! Editor modes and tuning parameters

use serde::{Serialize, Deserialize};

/// What the editor computes and who receives input
///
/// Switching modes only changes what is derived and drawn from the
/// control points, never the points themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorMode {
    /// 2D control point editing; curve evaluation only
    #[default]
    Edit2D,
    /// Orbit the camera around the curve; no editing
    View3D,
    /// Orbit the camera around the revolved surface; no editing
    Revolution,
}

/// Curve fitting algorithm applied to the control polygon
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveKind {
    /// Bézier via de Casteljau evaluation
    #[default]
    Bezier,
    /// Quadratic B-spline approximation via Chaikin corner-cutting
    BSpline,
}

/// Host-tunable editor parameters, pushed by the panel each frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    pub curve_kind: CurveKind,
    /// Curve sample count per unit parameter (clamped to >= 1 at use)
    pub resolution: u32,
    /// Rendered point size in pixels; also drives the hit-test radii
    pub point_size: f32,
    /// Angular divisions of the revolved surface (clamped to >= 1 at use)
    pub sections: u32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            curve_kind: CurveKind::Bezier,
            resolution: 10,
            point_size: 5.0,
            sections: 16,
        }
    }
}

impl EditorSettings {
    /// Distance within which a click grabs an existing point, in
    /// normalized viewport units derived from the pixel point size
    pub fn hit_radius(&self) -> f32 {
        self.point_size / 800.0
    }

    /// Slightly tighter radius used when deleting, so a sweep in delete
    /// mode does not take out neighbors
    pub fn delete_radius(&self) -> f32 {
        self.point_size / 1000.0
    }
}
