//! Sparks streaming past the camera inside the wormhole.
//!
//! The only layer that mutates its geometry: while active, every spark
//! advances along +z and wraps back to the far end of the tunnel.

use super::geometry::{tunnel_sparks, PointCloud};
use super::params::LayerParams;
use super::{Layer, LayerId};
use crate::timeline::FrameSnapshot;
use crate::util::easing::Window;

/// Hard window in which the sparks are drawn and animated.
pub const ACTIVE: Window = Window::hard(0.55, 0.80);
/// Spark opacity while active.
pub const OPACITY: f32 = 0.9;
/// Spark speed along +z in units per second.
pub const SPEED: f32 = 240.0;
/// A spark passing this z is recycled.
pub const WRAP_AT: f32 = 50.0;
/// Where recycled sparks re-enter.
pub const RESPAWN_Z: f32 = -250.0;

/// Whether the sparks are active at `progress`.
#[must_use]
pub fn derive(progress: f32) -> bool {
    ACTIVE.contains(progress)
}

/// Layer owning the spark cloud.
#[derive(Debug)]
pub struct TunnelSparksLayer {
    cloud: PointCloud,
}

impl TunnelSparksLayer {
    /// Generate `count` sparks from `seed`.
    #[must_use]
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            cloud: tunnel_sparks(count, seed),
        }
    }

    fn advance(&mut self, dt: f32) {
        let step = SPEED * dt;
        for p in &mut self.cloud.positions {
            p.z += step;
            if p.z > WRAP_AT {
                p.z = RESPAWN_Z;
            }
        }
    }
}

impl Layer for TunnelSparksLayer {
    fn id(&self) -> LayerId {
        LayerId::TunnelSparks
    }

    fn update(&mut self, frame: &FrameSnapshot) -> LayerParams {
        if !derive(frame.progress) {
            return LayerParams::hidden(self.id());
        }
        if frame.delta.is_finite() && frame.delta > 0.0 {
            self.advance(frame.delta);
        }
        LayerParams::new(self.id(), true, OPACITY, 0.0)
            .with_clock(frame.elapsed, frame.progress)
    }

    fn points(&self) -> Option<&PointCloud> {
        Some(&self.cloud)
    }
}
