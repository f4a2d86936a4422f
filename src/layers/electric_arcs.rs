//! Lightning crawling along the inside of the wormhole.

use super::params::LayerParams;
use super::wormhole::{tube_transform, GATE};
use super::{Layer, LayerId};
use crate::timeline::FrameSnapshot;
use crate::util::easing::{fade_in, fade_out};

/// Arc animation speed relative to wall time.
pub const TIME_SCALE: f32 = 2.0;
/// Roll of the arc cylinder, radians per second.
pub const ROLL_RATE: f32 = 12.0;
/// Arc cylinder radius, inside the tunnel wall.
pub const ARC_RADIUS: f32 = 5.0;
/// Arc cylinder length.
pub const ARC_LENGTH: f32 = 300.0;

/// Derived arc parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricArcParams {
    /// Bolt opacity.
    pub intensity: f32,
    /// Shader time.
    pub time: f32,
    /// Roll about the tunnel axis in radians.
    pub roll: f32,
    /// Whether the mesh is drawn.
    pub visible: bool,
}

/// Arc parameters at `progress` and wall time `time`.
#[must_use]
pub fn derive(progress: f32, time: f32) -> ElectricArcParams {
    ElectricArcParams {
        intensity: fade_in(0.55, 0.65, progress)
            * fade_out(0.75, 0.80, progress),
        time: time * TIME_SCALE,
        roll: time * ROLL_RATE,
        visible: GATE.contains(progress),
    }
}

/// Layer wrapper for the arcs.
#[derive(Debug, Default)]
pub struct ElectricArcsLayer;

impl Layer for ElectricArcsLayer {
    fn id(&self) -> LayerId {
        LayerId::ElectricArcs
    }

    fn update(&mut self, frame: &FrameSnapshot) -> LayerParams {
        let arcs = derive(frame.progress, frame.elapsed);
        if !arcs.visible {
            return LayerParams::hidden(self.id());
        }
        LayerParams::new(self.id(), true, arcs.intensity, 0.0)
            .with_transform(tube_transform(1.0, arcs.roll))
            .with_clock(arcs.time, frame.progress)
            .with_extra([ARC_RADIUS, ARC_LENGTH, 0.0, 0.0])
    }
}
