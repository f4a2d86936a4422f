//! Shared utilities for the choreography engine.
//!
//! Helpers for windowed easing and frame timing.

pub mod easing;
pub mod frame_timing;
