//! The wormhole tunnel: a long twisted cylinder seen from inside.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use super::params::{LayerParams, LayerTransform};
use super::{Layer, LayerId};
use crate::timeline::FrameSnapshot;
use crate::util::easing::{fade_in, fade_out, Window};

/// Progress interval in which the tunnel mesh exists.
pub const GATE: Window = Window::hard(0.50, 0.85);
/// Tunnel centre along z.
pub const TUNNEL_CENTER_Z: f32 = -80.0;
/// Tunnel radius.
pub const TUNNEL_RADIUS: f32 = 8.0;
/// Tunnel length along its axis.
pub const TUNNEL_LENGTH: f32 = 400.0;

/// Derived wormhole parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WormholeParams {
    /// Stripe and fire opacity.
    pub intensity: f32,
    /// Vertex twist phase, `time × 1.5`.
    pub twist: f32,
    /// Stripe scroll phase, `time × 20`.
    pub scroll: f32,
    /// Whether the mesh is drawn.
    pub visible: bool,
}

/// Wormhole parameters at `progress` and wall time `time`.
#[must_use]
pub fn derive(progress: f32, time: f32) -> WormholeParams {
    WormholeParams {
        intensity: fade_in(0.55, 0.60, progress)
            * fade_out(0.78, 0.82, progress),
        twist: time * 1.5,
        scroll: time * 20.0,
        visible: GATE.contains(progress),
    }
}

/// Tube placement shared by the wormhole and the electric arcs: rotated so
/// the cylinder axis runs along z.
pub(crate) fn tube_transform(scale: f32, roll: f32) -> LayerTransform {
    LayerTransform {
        translation: Vec3::new(0.0, 0.0, TUNNEL_CENTER_Z),
        rotation: Vec3::new(FRAC_PI_2, 0.0, roll),
        scale,
    }
}

/// Layer wrapper for the tunnel.
#[derive(Debug, Default)]
pub struct WormholeLayer;

impl Layer for WormholeLayer {
    fn id(&self) -> LayerId {
        LayerId::Wormhole
    }

    fn update(&mut self, frame: &FrameSnapshot) -> LayerParams {
        let tunnel = derive(frame.progress, frame.elapsed);
        if !tunnel.visible {
            return LayerParams::hidden(self.id());
        }
        // Extra slots: twist, scroll, radius, length.
        LayerParams::new(self.id(), true, tunnel.intensity, 0.0)
            .with_transform(tube_transform(1.0, 0.0))
            .with_clock(frame.elapsed, frame.progress)
            .with_extra([
                tunnel.twist,
                tunnel.scroll,
                TUNNEL_RADIUS,
                TUNNEL_LENGTH,
            ])
    }
}
