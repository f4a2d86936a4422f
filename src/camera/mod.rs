//! Camera choreography for the sequence.
//!
//! The target pose is a pure function of progress ([`path`]); the rendered
//! pose follows it through a smoothing rig ([`rig`]) that adds procedural
//! shake.

/// Core camera struct and GPU uniform types.
pub mod core;
/// Piecewise progress-to-target camera path.
pub mod path;
/// Smoothing accumulator and shake.
pub mod rig;

pub use self::core::{Camera, CameraUniform};
pub use path::{look_at_at, target_at, CameraSegment, CameraTarget};
pub use rig::{CameraPose, CameraRig};
