//! Editor document for the Revolve engine
//!
//! This crate owns the mutable state of an editing session: the ordered
//! control point set, the interaction state machine that mutates it, the
//! turntable camera, and the mode/settings types the host panel drives.
//! Derived geometry is always rebuilt wholesale through `revolve_math`,
//! never patched.
//!
//! ## Core Types
//!
//! - [`ControlPointSet`] - ordered control points, one writer per frame
//! - [`CurveEditor`] - drag/create/delete state machine plus regeneration
//! - [`TurntableCamera`] - orbit/zoom camera supplying view/projection
//! - [`EditorMode`], [`CurveKind`], [`EditorSettings`] - panel-facing knobs

mod control_points;
mod editor;
mod camera;
mod settings;

pub use control_points::{ControlPoint, ControlPointSet, ACTIVE_COLOR, DRAG_COLOR};
pub use editor::{CurveEditor, InteractionState, CURVE_COLOR, POLYGON_COLOR, SURFACE_COLOR};
pub use camera::{OrbitParams, Projection, TurntableCamera};
pub use settings::{CurveKind, EditorMode, EditorSettings};
