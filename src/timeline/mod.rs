//! The progress timeline: phase classification, playhead state, and the
//! per-frame clock that advances it.
//!
//! A session owns exactly one [`TimelineState`]. Each frame the
//! [`ProgressClock`] ticks it, then a [`FrameSnapshot`] is captured and fanned
//! out to the camera and every visual layer.

/// Per-frame progress advancement with loop/hold end behavior.
pub mod clock;
/// Five ordered narrative phases and their fixed thresholds.
pub mod phase;
/// Read-only per-frame view passed to downstream consumers.
pub mod snapshot;
/// The session playhead and its control operations.
pub mod state;

pub use clock::{EndBehavior, ProgressClock, TickEvent};
pub use phase::Phase;
pub use snapshot::FrameSnapshot;
pub use state::{PlaybackStatus, TimelineState};
