//! The particle halo: it vibrates with the star's instability, is sucked
//! into the singularity, and reassembles as a double helix before fading.
//!
//! Unlike the other layers this one reads a *smoothed* progress that chases
//! the playhead by 10% per frame, so scrubs ease the particles into place
//! instead of teleporting them.

use glam::Vec3;

use super::geometry::{halo_and_helix, PointCloud};
use super::params::{LayerParams, LayerTransform};
use super::{Layer, LayerId};
use crate::timeline::FrameSnapshot;
use crate::util::easing::{fade_in, fade_out, lerp, Window};

/// Per-frame blend of the smoothed progress toward the playhead.
pub const PROGRESS_SMOOTHING: f32 = 0.1;
/// Whole-cloud spin while the halo is intact, radians per second.
const HALO_SPIN_RATE: f32 = 0.03;
/// Progress below which the halo swirls.
const SWIRL_END: f32 = 0.2;

const IMPLOSION: Window = Window::new(0.20, 0.24, 0.02);
const HELIX: Window = Window::with_fades(0.22, 0.70, 0.13, 0.10);

const CALM: Vec3 = Vec3::new(0.2, 0.6, 1.0);
const UNSTABLE: Vec3 = Vec3::new(1.0, 0.3, 0.1);
const HELIX_CYAN: Vec3 = Vec3::new(0.0, 1.0, 0.8);

/// Derived particle parameters for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixParams {
    /// Progress these parameters were derived from.
    pub progress: f32,
    /// Vibration strength and pull toward red.
    pub instability: f32,
    /// Pull toward the origin during the implosion.
    pub implosion: f32,
    /// Blend from halo to helix.
    pub helix_mix: f32,
    /// Cloud opacity.
    pub alpha: f32,
    /// Point-size multiplier, flashing at the implosion.
    pub size_flash: f32,
    /// Base particle colour.
    pub color: Vec3,
}

/// Particle parameters at `progress`. Time only enters per-particle motion.
#[must_use]
pub fn derive(progress: f32) -> HelixParams {
    let instability = fade_in(0.0, 0.20, progress);
    let helix_mix = HELIX.eval(progress);
    let color = CALM.lerp(UNSTABLE, instability).lerp(HELIX_CYAN, helix_mix);
    HelixParams {
        progress,
        instability,
        implosion: IMPLOSION.eval(progress),
        helix_mix,
        alpha: fade_out(0.60, 0.65, progress),
        size_flash: (2.0 - 20.0 * (progress - 0.22).abs()).max(1.0),
        color,
    }
}

/// Where one particle is drawn, given its halo rest position and its helix
/// target.
///
/// While the halo is intact it swirls about y at a rate that varies with
/// height. Instability adds a shared jitter, the implosion pulls everything
/// toward the origin, and the helix mix blends toward the target through
/// a chaotic offset that settles as the mix completes.
#[must_use]
pub fn particle_position(
    rest: Vec3,
    target: Vec3,
    params: &HelixParams,
    time: f32,
) -> Vec3 {
    let mut pos = rest;

    if params.progress < SWIRL_END {
        let angle = time * 0.1 + pos.y * 0.1;
        let (s, c) = angle.sin_cos();
        pos = Vec3::new(pos.x * c - pos.z * s, pos.y, pos.x * s + pos.z * c);
    }

    if params.instability > 0.0 {
        let shake = Vec3::new((time * 30.0).sin(), (time * 30.0).cos(), 0.0);
        pos += shake * 0.1 * params.instability;
    }

    if params.implosion > 0.0 {
        pos = pos.lerp(Vec3::ZERO, params.implosion * 0.9);
    }

    if params.helix_mix > 0.0 {
        let chaos = (1.0 - params.helix_mix) * 5.0;
        let scattered = pos + Vec3::splat((time * 10.0).sin() * chaos);
        pos = scattered.lerp(target, params.helix_mix);
    }

    pos
}

/// Layer owning the halo/helix cloud and its smoothed progress.
#[derive(Debug)]
pub struct ParticleHelixLayer {
    cloud: PointCloud,
    smoothed: f32,
    spin: f32,
}

impl ParticleHelixLayer {
    /// Generate `count` particles from `seed`.
    #[must_use]
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            cloud: halo_and_helix(count, seed),
            smoothed: 0.0,
            spin: 0.0,
        }
    }

    /// The smoothed progress the particles are currently drawn at.
    #[must_use]
    pub fn smoothed_progress(&self) -> f32 {
        self.smoothed
    }
}

impl Layer for ParticleHelixLayer {
    fn id(&self) -> LayerId {
        LayerId::ParticleHelix
    }

    fn update(&mut self, frame: &FrameSnapshot) -> LayerParams {
        self.smoothed =
            lerp(self.smoothed, frame.progress, PROGRESS_SMOOTHING);
        if frame.progress < SWIRL_END {
            self.spin += HALO_SPIN_RATE * frame.delta;
        }

        let helix = derive(self.smoothed);
        let visible = helix.alpha > 0.0;
        // Extra slots: instability, implosion, helix mix, size flash.
        LayerParams::new(self.id(), visible, helix.alpha, helix.helix_mix)
            .with_transform(LayerTransform {
                rotation: Vec3::new(0.0, self.spin, 0.0),
                ..LayerTransform::IDENTITY
            })
            .with_clock(frame.elapsed, self.smoothed)
            .with_extra([
                helix.instability,
                helix.implosion,
                helix.helix_mix,
                helix.size_flash,
            ])
    }

    fn points(&self) -> Option<&PointCloud> {
        Some(&self.cloud)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_peaks_at_implosion() {
        assert!((derive(0.22).size_flash - 2.0).abs() < 1e-5);
        assert_eq!(derive(0.5).size_flash, 1.0);
        assert_eq!(derive(0.0).size_flash, 1.0);
    }

    #[test]
    fn helix_fully_formed_mid_sequence() {
        let helix = derive(0.5);
        assert_eq!(helix.helix_mix, 1.0);
        assert_eq!(helix.alpha, 1.0);
        assert_eq!(helix.implosion, 0.0);
        assert!((helix.color - HELIX_CYAN).length() < 1e-5);
    }

    #[test]
    fn fades_out_before_wormhole() {
        assert_eq!(derive(0.65).alpha, 0.0);
        assert_eq!(derive(0.70).helix_mix, 0.0);
    }

    #[test]
    fn implosion_pulls_toward_origin() {
        let params = derive(0.22);
        assert_eq!(params.implosion, 1.0);
        let rest = Vec3::new(10.0, 0.0, 0.0);
        let pos = particle_position(rest, Vec3::ZERO, &params, 0.0);
        assert!(pos.length() < rest.length());
    }

    #[test]
    fn formed_helix_lands_on_target() {
        let params = derive(0.5);
        let target = Vec3::new(3.0, 1.0, -2.0);
        let pos = particle_position(Vec3::splat(12.0), target, &params, 7.3);
        assert!((pos - target).length() < 1e-4);
    }

    #[test]
    fn calm_halo_only_swirls() {
        let params = derive(0.0);
        let rest = Vec3::new(10.0, 0.0, 0.0);
        let pos = particle_position(rest, Vec3::ZERO, &params, 5.0);
        assert!((pos.length() - rest.length()).abs() < 1e-4);
        assert_eq!(pos.y, 0.0);
    }

    #[test]
    fn smoothed_progress_chases_playhead() {
        let mut layer = ParticleHelixLayer::new(16, 1);
        let frame = FrameSnapshot::at(0.5, 0.0);
        let params = layer.update(&frame);
        assert!((layer.smoothed_progress() - 0.05).abs() < 1e-6);
        assert_eq!(params.uniform.progress, layer.smoothed_progress());

        for _ in 0..300 {
            let _ = layer.update(&frame);
        }
        assert!((layer.smoothed_progress() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn exposes_its_cloud() {
        let layer = ParticleHelixLayer::new(64, 1);
        let cloud = layer.points().map(PointCloud::len);
        assert_eq!(cloud, Some(64));
    }
}
