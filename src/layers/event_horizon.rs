//! The black hole: an opaque sphere ringed by a spiralling accretion disk.

use glam::Vec3;

use super::params::{LayerParams, LayerTransform};
use super::{Layer, LayerId};
use crate::timeline::FrameSnapshot;
use crate::util::easing::{fade_in, fade_out};

/// Radius of the opaque core at full scale.
pub const HORIZON_RADIUS: f32 = 2.0;
/// Inner and outer radius of the accretion disk at full scale.
pub const DISK_RADII: (f32, f32) = (2.2, 5.0);

/// Derived black-hole parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventHorizonParams {
    /// Uniform scale of the group.
    pub scale: f32,
    /// Tilt about x in radians.
    pub tilt: f32,
}

impl EventHorizonParams {
    /// Drawn only once it has grown past a sliver.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.scale > 0.01
    }
}

/// Black-hole parameters at `progress` and wall time `time`.
#[must_use]
pub fn derive(progress: f32, time: f32) -> EventHorizonParams {
    EventHorizonParams {
        scale: fade_in(0.15, 0.25, progress) * fade_out(0.60, 0.65, progress),
        tilt: progress * 0.5 + time * 0.1,
    }
}

/// Layer wrapper for the black hole and its disk.
#[derive(Debug, Default)]
pub struct EventHorizonLayer;

impl Layer for EventHorizonLayer {
    fn id(&self) -> LayerId {
        LayerId::EventHorizon
    }

    fn update(&mut self, frame: &FrameSnapshot) -> LayerParams {
        let horizon = derive(frame.progress, frame.elapsed);
        if !horizon.visible() {
            return LayerParams::hidden(self.id());
        }
        LayerParams::new(self.id(), true, horizon.scale, 0.0)
            .with_transform(LayerTransform {
                translation: Vec3::ZERO,
                rotation: Vec3::new(horizon.tilt, 0.0, 0.0),
                scale: horizon.scale,
            })
            .with_clock(frame.elapsed, frame.progress)
            .with_extra([DISK_RADII.0, DISK_RADII.1, HORIZON_RADIUS, 0.0])
    }
}
