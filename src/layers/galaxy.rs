//! The child universe: a spiral galaxy that fades in at the end of the
//! sequence and slowly turns.

use glam::Vec3;

use super::geometry::{galaxy, PointCloud};
use super::params::{LayerParams, LayerTransform};
use super::{Layer, LayerId};
use crate::timeline::FrameSnapshot;
use crate::util::easing::fade_in;

/// Where the galaxy sits, below and far ahead of the horizon.
pub const GALAXY_CENTER: Vec3 = Vec3::new(0.0, -20.0, -400.0);
/// Forward tilt about x in radians.
pub const GALAXY_TILT: f32 = 0.5;
/// Spin speed relative to wall time.
pub const TIME_SCALE: f32 = 1.5;

/// Derived galaxy parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyParams {
    /// Opacity.
    pub visibility: f32,
    /// Shader time.
    pub time: f32,
}

impl GalaxyParams {
    /// Drawn once it has faded in past a sliver.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visibility > 0.01
    }
}

/// Galaxy parameters at `progress` and wall time `time`.
#[must_use]
pub fn derive(progress: f32, time: f32) -> GalaxyParams {
    GalaxyParams {
        visibility: fade_in(0.75, 0.85, progress),
        time: time * TIME_SCALE,
    }
}

/// Where one star is drawn at shader time `time`.
///
/// Inner stars orbit faster than outer ones; nothing moves at radius 100.
#[must_use]
pub fn star_position(rest: Vec3, time: f32) -> Vec3 {
    let angle = time * 0.05 * (1.0 - rest.length() * 0.01);
    let (s, c) = angle.sin_cos();
    Vec3::new(rest.x * c - rest.z * s, rest.y, rest.x * s + rest.z * c)
}

/// Point-size twinkle factor in `[0.8, 1.2]`.
#[must_use]
pub fn twinkle(randomness: f32, time: f32) -> f32 {
    let phase = (time * 4.0 + randomness * 100.0).sin() * 0.5 + 0.5;
    0.8 + phase * 0.4
}

/// Layer owning the galaxy cloud.
#[derive(Debug)]
pub struct GalaxyLayer {
    cloud: PointCloud,
}

impl GalaxyLayer {
    /// Generate `count` stars from `seed`.
    #[must_use]
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            cloud: galaxy(count, seed),
        }
    }
}

impl Layer for GalaxyLayer {
    fn id(&self) -> LayerId {
        LayerId::Galaxy
    }

    fn update(&mut self, frame: &FrameSnapshot) -> LayerParams {
        let galaxy = derive(frame.progress, frame.elapsed);
        if !galaxy.visible() {
            return LayerParams::hidden(self.id());
        }
        LayerParams::new(self.id(), true, galaxy.visibility, 0.0)
            .with_transform(LayerTransform {
                translation: GALAXY_CENTER,
                rotation: Vec3::new(GALAXY_TILT, 0.0, 0.0),
                scale: 1.0,
            })
            .with_clock(galaxy.time, frame.progress)
    }

    fn points(&self) -> Option<&PointCloud> {
        Some(&self.cloud)
    }
}
