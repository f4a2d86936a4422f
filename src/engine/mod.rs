//! The session engine: owns the timeline, the camera rig, and the layer
//! registry, and runs the per-frame pipeline.
//!
//! Each call to [`GenesisEngine::frame`] performs, in order:
//!
//! 1. clock tick (the only per-frame write to the timeline),
//! 2. snapshot capture,
//! 3. layer derivation,
//! 4. camera smoothing.
//!
//! Control operations ([`execute`](GenesisEngine::execute) and friends) may
//! arrive between frames; they take effect at the next tick.

mod accessors;
/// Command vocabulary.
pub mod command;
mod control;

use serde::Serialize;

pub use self::command::GenesisCommand;
use crate::camera::{CameraPose, CameraRig};
use crate::layers::{LayerParams, LayerRegistry};
use crate::options::Options;
use crate::timeline::{FrameSnapshot, ProgressClock, TickEvent, TimelineState};

/// Everything produced by one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameOutput {
    /// Timeline view the frame was derived from.
    pub snapshot: FrameSnapshot,
    /// What the clock did this frame.
    pub event: TickEvent,
    /// Smoothed camera placement.
    pub camera: CameraPose,
    /// Per-layer render parameters, in draw order.
    pub layers: Vec<LayerParams>,
}

/// One playback session of the genesis sequence.
#[derive(Debug)]
pub struct GenesisEngine {
    options: Options,
    timeline: TimelineState,
    clock: ProgressClock,
    rig: CameraRig,
    layers: LayerRegistry,
    elapsed: f32,
    frame_index: u64,
    aspect: f32,
}

impl GenesisEngine {
    /// Start a session with the given options.
    ///
    /// Progress starts at 0; playback starts immediately unless
    /// `options.playback.autoplay` is false.
    #[must_use]
    pub fn new(mut options: Options) -> Self {
        options.keybindings.rebuild_reverse_map();
        let clock = options.playback.clock();
        log::info!(
            "genesis session: rate {:.4}/s, {:?} at end, autoplay {}",
            clock.rate,
            clock.end_behavior,
            options.playback.autoplay,
        );
        if let Some(seconds) = clock.sequence_duration() {
            log::debug!("full sequence takes {seconds:.1}s");
        }

        Self {
            timeline: TimelineState::with_autoplay(options.playback.autoplay),
            clock,
            rig: CameraRig::new(&options.camera),
            layers: LayerRegistry::new(&options.geometry),
            elapsed: 0.0,
            frame_index: 0,
            aspect: 16.0 / 9.0,
            options,
        }
    }

    /// Advance the session by `dt` seconds and derive the frame.
    ///
    /// Non-finite or negative `dt` is treated as zero: the frame is derived
    /// but nothing advances.
    pub fn frame(&mut self, dt: f32) -> FrameOutput {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        let event = self.clock.tick(&mut self.timeline, dt);
        self.elapsed += dt;
        let snapshot = FrameSnapshot::capture(
            &self.timeline,
            self.elapsed,
            dt,
            self.frame_index,
        );
        self.frame_index += 1;

        let layers = self.layers.update(&snapshot);
        let camera = self.rig.update(&snapshot);

        FrameOutput {
            snapshot,
            event,
            camera,
            layers,
        }
    }
}
