//! The ancestral star: a turbulent plasma sphere that destabilises and
//! collapses into the singularity.

use glam::Vec3;

use super::params::{LayerParams, LayerTransform};
use super::{Layer, LayerId};
use crate::timeline::FrameSnapshot;
use crate::util::easing::{fade_in, fade_out, lerp};

/// Sphere radius before collapse.
pub const STAR_RADIUS: f32 = 3.5;
/// Plasma animation speed relative to wall time.
pub const TIME_SCALE: f32 = 1.2;
/// Spin rates in radians per second about y and z.
const SPIN_Y: f32 = -0.3;
const SPIN_Z: f32 = 0.12;

/// Derived star parameters for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarCoreParams {
    /// Surface displacement and red-vein strength.
    pub turbulence: f32,
    /// Collapse toward a tenth of the radius.
    pub shrink: f32,
    /// Body opacity, `1 - shrink`.
    pub opacity: f32,
    /// Fresnel rim that outlives the body briefly.
    pub rim: f32,
    /// Radial pulse offset.
    pub pulse: f32,
    /// Shader time (wall time × 1.2).
    pub time: f32,
}

impl StarCoreParams {
    /// Whether anything of the star is still visible.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.opacity.max(self.rim) > 0.0
    }
}

/// Star parameters at `progress` and wall time `time`.
#[must_use]
pub fn derive(progress: f32, time: f32) -> StarCoreParams {
    let shrink = fade_in(0.18, 0.22, progress);
    let shader_time = time * TIME_SCALE;
    StarCoreParams {
        turbulence: fade_in(0.0, 0.20, progress),
        shrink,
        opacity: 1.0 - shrink,
        rim: fade_out(0.20, 0.25, progress),
        pulse: 0.05 * (shader_time * 5.0).sin(),
        time: shader_time,
    }
}

/// Layer wrapper for the star sphere.
#[derive(Debug, Default)]
pub struct StarCoreLayer;

impl Layer for StarCoreLayer {
    fn id(&self) -> LayerId {
        LayerId::StarCore
    }

    fn update(&mut self, frame: &FrameSnapshot) -> LayerParams {
        let star = derive(frame.progress, frame.elapsed);
        if !star.visible() {
            return LayerParams::hidden(self.id());
        }
        // Extra slots: turbulence, shrink, rim, pulse.
        LayerParams::new(
            self.id(),
            true,
            star.opacity.max(star.rim),
            star.turbulence,
        )
        .with_transform(LayerTransform {
            translation: Vec3::ZERO,
            rotation: Vec3::new(
                0.0,
                SPIN_Y * frame.elapsed,
                SPIN_Z * frame.elapsed,
            ),
            scale: STAR_RADIUS * lerp(1.0, 0.1, star.shrink),
        })
        .with_clock(star.time, frame.progress)
        .with_extra([star.turbulence, star.shrink, star.rim, star.pulse])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calm_at_start() {
        let star = derive(0.0, 0.0);
        assert_eq!(star.turbulence, 0.0);
        assert_eq!(star.opacity, 1.0);
        assert_eq!(star.rim, 1.0);
        assert!(star.visible());
    }

    #[test]
    fn rim_outlives_body() {
        let star = derive(0.22, 3.0);
        assert_eq!(star.opacity, 0.0);
        assert!(star.rim > 0.0);
        assert!(star.visible());
    }

    #[test]
    fn gone_after_collapse() {
        let star = derive(0.3, 3.0);
        assert!(!star.visible());
        let params = StarCoreLayer.update(&FrameSnapshot::at(0.3, 3.0));
        assert!(!params.visible);
    }

    #[test]
    fn turbulence_saturates_at_collapse() {
        assert_eq!(derive(0.2, 0.0).turbulence, 1.0);
        assert!(derive(0.1, 0.0).turbulence > 0.0);
    }

    #[test]
    fn shrink_scales_the_sphere() {
        let params = StarCoreLayer.update(&FrameSnapshot::at(0.21, 0.0));
        assert!(params.transform.scale < STAR_RADIUS);
        assert!(params.transform.scale > STAR_RADIUS * 0.1);
    }
}
