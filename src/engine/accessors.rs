//! Read-only query methods and viewport helpers for [`GenesisEngine`].

use super::GenesisEngine;
use crate::camera::{Camera, CameraPose, CameraUniform};
use crate::layers::LayerRegistry;
use crate::options::Options;
use crate::timeline::{Phase, PlaybackStatus, TimelineState};

// ── Timeline ──

impl GenesisEngine {
    /// Current playhead in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timeline.progress()
    }

    /// Phase of the current playhead.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.timeline.phase()
    }

    /// Whether autoplay is running.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.timeline.is_playing()
    }

    /// Whether the sequence ran to its end (hold mode).
    #[must_use]
    pub fn has_finished(&self) -> bool {
        self.timeline.has_finished()
    }

    /// Playing / paused / finished.
    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.timeline.status()
    }

    /// Read-only access to the timeline.
    #[must_use]
    pub fn timeline(&self) -> &TimelineState {
        &self.timeline
    }

    /// Seconds of frame time consumed so far.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

// ── Scene access ──

impl GenesisEngine {
    /// The session's options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The fixed layer set, for renderers that need point-cloud geometry.
    #[must_use]
    pub fn layers(&self) -> &LayerRegistry {
        &self.layers
    }
}

// ── Viewport ──

impl GenesisEngine {
    /// Update the viewport aspect ratio. Zero-sized viewports are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Full camera for a pose produced by [`frame`](Self::frame).
    #[must_use]
    pub fn camera(&self, pose: &CameraPose) -> Camera {
        Camera::from_pose(pose, &self.options.camera, self.aspect)
    }

    /// GPU uniform block for a pose produced by [`frame`](Self::frame).
    #[must_use]
    pub fn camera_uniform(&self, pose: &CameraPose) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&self.camera(pose), pose.shake);
        uniform
    }
}
