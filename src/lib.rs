//! Revolve - interactive curve and surface-of-revolution modeling
//!
//! A frame-driven editing engine: control points go in through pointer
//! and keyboard state, triangle and line-strip vertex streams come out.
//! The host owns the window, the event loop and the GPU; this crate owns
//! the document, the interaction state machine and the geometry.
//!
//! ```no_run
//! use revolve::{AppConfig, EditorSession};
//! use revolve_input::InputCollector;
//!
//! let config = AppConfig::load_or_default();
//! let mut session = EditorSession::new(&config);
//! let mut collector = InputCollector::new(800, 800);
//!
//! // each frame, after draining window events into the collector:
//! let output = session.frame(&collector.end_frame());
//! // upload output.points / output.curve / output.surface and draw
//! ```

pub mod config;
mod session;

pub use config::{AppConfig, ConfigError};
pub use session::{EditorSession, FrameOutput};

pub use revolve_core::{
    ControlPoint, ControlPointSet, CurveEditor, CurveKind, EditorMode, EditorSettings,
    OrbitParams, Projection, TurntableCamera,
};
pub use revolve_input::{FrameInput, InputCollector, OrbitController};
pub use revolve_math::{ColorGeometry, Mat4, SurfaceGeometry, Vec3};
