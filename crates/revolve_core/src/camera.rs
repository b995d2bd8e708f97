//! Turntable viewport camera
//!
//! Orbits the origin on a sphere described by `{distance, theta, phi}`
//! and hands view/projection matrices to the host rendering backend. The
//! camera knows nothing about curves; the editor only consults the mode
//! selector to decide who receives input.

use revolve_math::{mat4, Mat4, Vec3};
use revolve_input::OrbitControl;
use serde::{Serialize, Deserialize};

// Keep the elevation short of the poles so the up vector stays valid
const PHI_LIMIT: f32 = 1.5;

/// Projection handed to the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    #[default]
    Perspective,
    Orthographic,
}

/// Orbit defaults and limits
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitParams {
    /// Starting distance from the origin
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Starting azimuth in radians
    pub theta: f32,
    /// Starting elevation in radians
    pub phi: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            distance: 5.0,
            min_distance: 1.0,
            max_distance: 30.0,
            theta: std::f32::consts::FRAC_PI_4,
            phi: std::f32::consts::FRAC_PI_4,
            fov: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Orbit/zoom camera looking at the origin
pub struct TurntableCamera {
    params: OrbitParams,
    distance: f32,
    theta: f32,
    phi: f32,
    projection: Projection,

    // View matrix cache, rebuilt when the orbit state changes
    view: Mat4,
    dirty: bool,
}

impl Default for TurntableCamera {
    fn default() -> Self {
        Self::new(OrbitParams::default())
    }
}

impl TurntableCamera {
    pub fn new(params: OrbitParams) -> Self {
        Self {
            params,
            distance: params.distance.clamp(params.min_distance, params.max_distance),
            theta: params.theta,
            phi: params.phi.clamp(-PHI_LIMIT, PHI_LIMIT),
            projection: Projection::Perspective,
            view: mat4::IDENTITY,
            dirty: true,
        }
    }

    /// Rotate around the vertical axis
    pub fn change_theta(&mut self, delta: f32) {
        self.theta += delta;
        self.dirty = true;
    }

    /// Raise or lower the orbit, clamped short of the poles
    pub fn change_phi(&mut self, delta: f32) {
        self.phi = (self.phi + delta).clamp(-PHI_LIMIT, PHI_LIMIT);
        self.dirty = true;
    }

    /// Move along the view ray, clamped to the configured range
    pub fn change_distance(&mut self, delta: f32) {
        self.distance =
            (self.distance + delta).clamp(self.params.min_distance, self.params.max_distance);
        self.dirty = true;
    }

    /// Return to the configured starting orbit
    pub fn reset(&mut self) {
        self.distance = self
            .params
            .distance
            .clamp(self.params.min_distance, self.params.max_distance);
        self.theta = self.params.theta;
        self.phi = self.params.phi.clamp(-PHI_LIMIT, PHI_LIMIT);
        self.dirty = true;
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    pub fn toggle_projection(&mut self) -> Projection {
        self.projection = match self.projection {
            Projection::Perspective => Projection::Orthographic,
            Projection::Orthographic => Projection::Perspective,
        };
        self.projection
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Camera position on the orbit sphere
    pub fn position(&self) -> Vec3 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        Vec3::new(
            self.distance * cos_phi * sin_theta,
            self.distance * sin_phi,
            self.distance * cos_phi * cos_theta,
        )
    }

    /// View matrix looking at the origin (cached until the orbit changes)
    pub fn view_matrix(&mut self) -> Mat4 {
        if self.dirty {
            self.view = mat4::look_at(self.position(), Vec3::ZERO, Vec3::Y);
            self.dirty = false;
        }
        self.view
    }

    /// Projection matrix for the current aspect ratio
    ///
    /// The orthographic frustum is sized so the view covers roughly the
    /// same extent as the perspective one at the current distance, which
    /// keeps zooming meaningful in both projections.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let fov_y = self.params.fov.to_radians();
        match self.projection {
            Projection::Perspective => {
                mat4::perspective(fov_y, aspect, self.params.near, self.params.far)
            }
            Projection::Orthographic => {
                let half_h = self.distance * (fov_y * 0.5).tan();
                let half_w = half_h * aspect;
                mat4::orthographic(
                    -half_w,
                    half_w,
                    -half_h,
                    half_h,
                    self.params.near,
                    self.params.far,
                )
            }
        }
    }
}

impl OrbitControl for TurntableCamera {
    fn orbit(&mut self, delta_theta: f32, delta_phi: f32) {
        self.change_theta(delta_theta);
        self.change_phi(delta_phi);
    }

    fn zoom(&mut self, delta: f32) {
        self.change_distance(delta);
    }

    fn position(&self) -> Vec3 {
        TurntableCamera::position(self)
    }
}
