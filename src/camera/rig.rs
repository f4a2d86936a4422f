use glam::Vec3;
use serde::Serialize;

use super::path::{look_at_at, target_at};
use crate::options::CameraOptions;
use crate::timeline::FrameSnapshot;
use crate::util::easing::lerp;

/// The camera placement handed to the renderer for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPose {
    /// Rendered eye position, after smoothing and shake.
    pub position: Vec3,
    /// Point the camera looks at.
    pub look_at: Vec3,
    /// Smoothed shake envelope applied this frame.
    pub shake: f32,
}

/// Smoothed follow camera riding the progress-driven path.
///
/// The rendered position lags the path target by an exponential blend, so
/// a scrub never jump-cuts the view.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    position: Vec3,
    shake: f32,
    follow: f32,
    recenter: f32,
    shake_scale: f32,
    shake_freq_x: f32,
    shake_freq_y: f32,
}

impl CameraRig {
    /// Rig parked at `(0, 0, start_distance)`, as the scene first opens.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, options.start_distance),
            shake: 0.0,
            follow: options.follow.clamp(0.0, 1.0),
            recenter: options.recenter.clamp(0.0, 1.0),
            shake_scale: options.shake_scale,
            shake_freq_x: options.shake_freq_x,
            shake_freq_y: options.shake_freq_y,
        }
    }

    /// Current (pre-frame) rendered position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Jump straight to the path target at `progress`, discarding lag.
    pub fn snap_to(&mut self, progress: f32) {
        let target = target_at(progress);
        self.position = target.position();
        self.shake = target.shake;
    }

    /// Blend toward this frame's target and apply shake.
    pub fn update(&mut self, frame: &FrameSnapshot) -> CameraPose {
        let target = target_at(frame.progress);

        self.position.z = lerp(self.position.z, target.z, self.follow);
        self.position.y = lerp(self.position.y, target.y, self.follow);
        self.shake = lerp(self.shake, target.shake, self.recenter);

        let amplitude = self.shake * self.shake_scale;
        let t = frame.elapsed;
        self.position.x += (t * self.shake_freq_x).sin() * amplitude;
        self.position.y += (t * self.shake_freq_y).cos() * amplitude;
        self.position.x = lerp(self.position.x, 0.0, self.recenter);

        CameraPose {
            position: self.position,
            look_at: look_at_at(frame.progress, target.z),
            shake: self.shake,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::path::DEEP_FIELD_POINT;

    fn still_options() -> CameraOptions {
        CameraOptions {
            shake_scale: 0.0,
            ..CameraOptions::default()
        }
    }

    #[test]
    fn starts_at_configured_distance() {
        let rig = CameraRig::new(&CameraOptions::default());
        assert_eq!(rig.position(), Vec3::new(0.0, 0.0, 12.0));
    }

    #[test]
    fn converges_on_target_without_jumping() {
        let mut rig = CameraRig::new(&still_options());
        let frame = FrameSnapshot::at(0.5, 0.0);
        let target = target_at(0.5);

        let first = rig.update(&frame);
        // One frame of blend covers only `follow` of the distance.
        let expected_z = lerp(12.0, target.z, 0.03);
        assert!((first.position.z - expected_z).abs() < 1e-5);

        for _ in 0..2000 {
            let _ = rig.update(&frame);
        }
        let pose = rig.update(&frame);
        assert!((pose.position.z - target.z).abs() < 1e-3);
        assert!((pose.position.y - target.y).abs() < 1e-3);
    }

    #[test]
    fn horizontal_offset_decays_toward_center() {
        let mut rig = CameraRig::new(&still_options());
        rig.snap_to(0.7);
        rig.position.x = 5.0;
        let pose = rig.update(&FrameSnapshot::at(0.7, 0.0));
        assert!((pose.position.x - 4.5).abs() < 1e-5);
        for _ in 0..200 {
            let _ = rig.update(&FrameSnapshot::at(0.7, 0.0));
        }
        assert!(rig.position().x.abs() < 1e-3);
    }

    #[test]
    fn shake_oscillates_on_both_axes() {
        let mut rig = CameraRig::new(&CameraOptions::default());
        rig.snap_to(0.5);
        let a = rig.update(&FrameSnapshot::at(0.5, 0.1));
        let b = rig.update(&FrameSnapshot::at(0.5, 0.2));
        assert!(a.position.x != 0.0);
        assert!((a.position.y - b.position.y).abs() > 0.0);
    }

    #[test]
    fn snap_removes_lag() {
        let mut rig = CameraRig::new(&still_options());
        rig.snap_to(0.9);
        let pose = rig.update(&FrameSnapshot::at(0.9, 0.0));
        let target = target_at(0.9);
        assert!((pose.position.z - target.z).abs() < 1e-3);
        assert_eq!(pose.look_at, DEEP_FIELD_POINT);
    }

    #[test]
    fn shake_envelope_is_smoothed_across_segment_jumps() {
        let mut rig = CameraRig::new(&CameraOptions::default());
        rig.snap_to(0.2);
        let before = target_at(0.2).shake;
        let pose = rig.update(&FrameSnapshot::at(0.21, 0.0));
        let after = target_at(0.21).shake;
        assert!(pose.shake > before.min(after));
        assert!(pose.shake < before.max(after));
    }
}
