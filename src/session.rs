//! Embeddable editing session
//!
//! `EditorSession` wires the editor, camera and controller into the
//! per-frame pipeline: input routing, state machine update, then
//! wholesale regeneration of the derived geometry. The host calls
//! [`EditorSession::frame`] exactly once per rendering frame and uploads
//! whatever comes back; no derived buffer survives from one frame to the
//! next.

use revolve_core::{
    CurveEditor, EditorMode, EditorSettings, CurveKind, Projection, TurntableCamera,
    SURFACE_COLOR,
};
use revolve_input::{FrameInput, OrbitController};
use revolve_math::{lathe, mat4, ColorGeometry, Mat4, SurfaceGeometry};

use crate::config::AppConfig;

/// Everything the host needs to draw one frame
#[derive(Clone, Debug)]
pub struct FrameOutput {
    /// Control points, drawn as points with per-point colors
    pub points: ColorGeometry,
    /// Line strip connecting the control points in curve order
    pub control_polygon: ColorGeometry,
    /// Sampled curve, drawn as a line strip
    pub curve: ColorGeometry,
    /// Revolved surface; present only in revolution mode
    pub surface: Option<SurfaceGeometry>,
    /// View matrix (identity in the 2D editor)
    pub view: Mat4,
    /// Projection matrix (identity in the 2D editor)
    pub projection: Mat4,
}

/// Frame-driven editing session
pub struct EditorSession {
    editor: CurveEditor,
    camera: TurntableCamera,
    controller: OrbitController,
    settings: EditorSettings,
    mode: EditorMode,
    aspect: f32,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl EditorSession {
    pub fn new(config: &AppConfig) -> Self {
        let editor = if config.editor.seed_quad {
            CurveEditor::with_default_quad()
        } else {
            CurveEditor::new()
        };

        Self {
            editor,
            camera: TurntableCamera::new(config.camera.to_orbit_params()),
            controller: OrbitController::new()
                .with_orbit_sensitivity(config.input.orbit_sensitivity)
                .with_zoom_step(config.input.zoom_step),
            settings: config.editor.to_settings(),
            mode: EditorMode::default(),
            aspect: 1.0,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Switch modes; the control points are kept, only what is computed
    /// and drawn from them changes.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if self.mode != mode {
            log::info!("mode switched to {:?}", mode);
            self.mode = mode;
        }
    }

    pub fn settings(&self) -> EditorSettings {
        self.settings
    }

    pub fn set_curve_kind(&mut self, kind: CurveKind) {
        self.settings.curve_kind = kind;
    }

    pub fn set_resolution(&mut self, resolution: u32) {
        self.settings.resolution = resolution;
    }

    pub fn set_point_size(&mut self, point_size: f32) {
        self.settings.point_size = point_size;
    }

    pub fn set_sections(&mut self, sections: u32) {
        self.settings.sections = sections;
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.camera.set_projection(projection);
    }

    /// Track the host viewport aspect ratio for the projection matrix
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn editor(&self) -> &CurveEditor {
        &self.editor
    }

    pub fn camera(&self) -> &TurntableCamera {
        &self.camera
    }

    /// Run one frame: route input, update state, regenerate geometry.
    ///
    /// Within the frame the order is strict - the state machine runs
    /// before any curve or surface is derived, so the output always
    /// reflects this frame's edits.
    pub fn frame(&mut self, input: &FrameInput) -> FrameOutput {
        match self.mode {
            EditorMode::Edit2D => {
                self.editor.update(input, &self.settings);
            }
            EditorMode::View3D | EditorMode::Revolution => {
                // Reset targets the camera while the editor is not active
                if input.reset {
                    self.camera.reset();
                } else {
                    self.controller.update(&mut self.camera, input);
                }
            }
        }

        let curve = self.editor.curve_geometry(&self.settings);
        let surface = match self.mode {
            EditorMode::Revolution if !curve.is_empty() => Some(lathe::revolve(
                &curve.positions,
                self.settings.sections,
                SURFACE_COLOR,
            )),
            _ => None,
        };

        let (view, projection) = match self.mode {
            EditorMode::Edit2D => (mat4::IDENTITY, mat4::IDENTITY),
            _ => (
                self.camera.view_matrix(),
                self.camera.projection_matrix(self.aspect),
            ),
        };

        FrameOutput {
            points: self.editor.point_geometry(),
            control_polygon: self.editor.polygon_geometry(),
            curve,
            surface,
            view,
            projection,
        }
    }
}
