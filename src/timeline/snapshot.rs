use serde::Serialize;

use super::phase::Phase;
use super::state::TimelineState;

/// Read-only view of the timeline for one frame.
///
/// Captured once per frame after the clock has ticked and handed by shared
/// reference to every layer and to the camera rig. Nothing downstream can
/// write back through it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameSnapshot {
    /// Playhead in `[0, 1]`.
    pub progress: f32,
    /// Phase of `progress`.
    pub phase: Phase,
    /// Seconds since the session started, independent of progress. Drives
    /// texture and oscillation animation.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Zero-based frame counter.
    pub frame: u64,
}

impl FrameSnapshot {
    /// Capture the current timeline state.
    #[must_use]
    pub fn capture(
        state: &TimelineState,
        elapsed: f32,
        delta: f32,
        frame: u64,
    ) -> Self {
        Self {
            progress: state.progress(),
            phase: state.phase(),
            elapsed,
            delta,
            frame,
        }
    }

    /// Snapshot at an arbitrary progress, for previews and tests.
    #[must_use]
    pub fn at(progress: f32, elapsed: f32) -> Self {
        let mut state = TimelineState::new();
        state.set_progress(progress);
        Self::capture(&state, elapsed, 0.0, 0)
    }
}
