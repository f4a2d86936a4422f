//! The collapse shockwave: a camera-facing ring that expands and fades
//! after the implosion.

use super::params::{LayerParams, LayerTransform};
use super::{Layer, LayerId};
use crate::timeline::FrameSnapshot;
use crate::util::easing::Window;

/// Gate outside which the billboard is never drawn.
pub const GATE: Window = Window::hard(0.15, 0.35);
/// Progress at which the wave starts expanding.
pub const TRIGGER: f32 = 0.22;
/// Progress span over which the wave expands.
pub const SPAN: f32 = 0.2;
/// World-space size of the billboard quad.
pub const BILLBOARD_SCALE: f32 = 35.0;
/// Ring thickness in quad UV units.
pub const RING_THICKNESS: f32 = 0.02;

/// Derived shockwave parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockwaveParams {
    /// Normalised wave time `(p - 0.22) / 0.2`; outside `[0, 1]` the ring
    /// is discarded.
    pub wave: f32,
    /// Ring radius in quad UV units.
    pub radius: f32,
    /// Ring opacity.
    pub intensity: f32,
    /// Gate open and wave in range.
    pub visible: bool,
}

/// Shockwave parameters at `progress`.
#[must_use]
pub fn derive(progress: f32) -> ShockwaveParams {
    let wave = (progress - TRIGGER) / SPAN;
    let visible = GATE.contains(progress) && (0.0..=1.0).contains(&wave);
    ShockwaveParams {
        wave,
        radius: wave * 0.8,
        intensity: (1.0 - wave).clamp(0.0, 1.0),
        visible,
    }
}

/// Layer wrapper for the shockwave billboard.
#[derive(Debug, Default)]
pub struct ShockwaveLayer;

impl Layer for ShockwaveLayer {
    fn id(&self) -> LayerId {
        LayerId::Shockwave
    }

    fn update(&mut self, frame: &FrameSnapshot) -> LayerParams {
        let wave = derive(frame.progress);
        if !wave.visible {
            return LayerParams::hidden(self.id());
        }
        // Extra slots: wave time, radius, thickness.
        LayerParams::new(self.id(), true, wave.intensity, 0.0)
            .with_transform(LayerTransform {
                scale: BILLBOARD_SCALE,
                ..LayerTransform::IDENTITY
            })
            .with_clock(frame.elapsed, frame.progress)
            .with_extra([wave.wave, wave.radius, RING_THICKNESS, 0.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_open_but_wave_not_started() {
        let wave = derive(0.18);
        assert!(wave.wave < 0.0);
        assert!(!wave.visible);
    }

    #[test]
    fn expands_and_fades() {
        let early = derive(0.25);
        let late = derive(0.33);
        assert!(early.visible && late.visible);
        assert!(late.radius > early.radius);
        assert!(late.intensity < early.intensity);
    }

    #[test]
    fn gate_closes_before_wave_completes() {
        let wave = derive(0.36);
        assert!(wave.wave < 1.0);
        assert!(!wave.visible);
    }

    #[test]
    fn trigger_point_is_full_intensity() {
        let wave = derive(TRIGGER);
        assert!(wave.visible);
        assert_eq!(wave.radius, 0.0);
        assert_eq!(wave.intensity, 1.0);
    }

    #[test]
    fn billboard_is_scaled() {
        let params = ShockwaveLayer.update(&FrameSnapshot::at(0.3, 0.0));
        assert_eq!(params.transform.scale, BILLBOARD_SCALE);
    }
}
