//! Closed-form camera path as a function of progress.
//!
//! The sequence is split into five contiguous segments, each with its own
//! law over the local parameter `t ∈ [0, 1]`. The `z`/`y` laws agree at every
//! shared boundary so scrubbing across a boundary never pops the camera.

use glam::Vec3;

use crate::util::easing::{ease_out_cubic, smoothstep};

/// Progress past which the camera stops tracking ahead of itself and locks
/// onto the deep-field point.
pub const DEEP_FIELD_LOCK: f32 = 0.8;

/// Fixed look-at point for the final flythrough.
pub const DEEP_FIELD_POINT: Vec3 = Vec3::new(0.0, -20.0, -500.0);

/// How far ahead of the target `z` the camera looks before the lock.
pub const LOOK_AHEAD: f32 = 50.0;

/// One of the five contiguous stretches of the camera path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraSegment {
    /// Slow approach toward the star, `[0.00, 0.20]`.
    Approach,
    /// Push-in through the collapse, `(0.20, 0.40]`.
    PushIn,
    /// Hover at the event horizon, `(0.40, 0.60]`.
    Hover,
    /// Rapid translation down the wormhole, `(0.60, 0.75]`.
    Translation,
    /// Eased deceleration into the deep field, `(0.75, 1.00]`.
    Deceleration,
}

impl CameraSegment {
    /// All segments in path order.
    pub const ALL: [CameraSegment; 5] = [
        CameraSegment::Approach,
        CameraSegment::PushIn,
        CameraSegment::Hover,
        CameraSegment::Translation,
        CameraSegment::Deceleration,
    ];

    /// Segment containing `progress` (inclusive upper bounds).
    #[must_use]
    pub fn of(progress: f32) -> Self {
        if progress <= 0.20 {
            Self::Approach
        } else if progress <= 0.40 {
            Self::PushIn
        } else if progress <= 0.60 {
            Self::Hover
        } else if progress <= 0.75 {
            Self::Translation
        } else {
            Self::Deceleration
        }
    }

    /// `(start, end)` progress range of this segment.
    #[must_use]
    pub fn range(self) -> (f32, f32) {
        match self {
            Self::Approach => (0.0, 0.20),
            Self::PushIn => (0.20, 0.40),
            Self::Hover => (0.40, 0.60),
            Self::Translation => (0.60, 0.75),
            Self::Deceleration => (0.75, 1.0),
        }
    }

    /// Local parameter `(progress − start) / width`, clamped to `[0, 1]`.
    #[must_use]
    pub fn local_t(self, progress: f32) -> f32 {
        let (start, end) = self.range();
        ((progress - start) / (end - start)).clamp(0.0, 1.0)
    }

    /// Evaluate this segment's law at `progress`.
    ///
    /// Public so boundary continuity can be checked from either side.
    #[must_use]
    pub fn evaluate(self, progress: f32) -> CameraTarget {
        let t = self.local_t(progress);
        match self {
            Self::Approach => CameraTarget {
                z: 30.0 - 8.0 * t,
                y: 0.0,
                shake: 0.05 + smoothstep(0.15, 0.20, progress) * 0.2,
            },
            Self::PushIn => CameraTarget {
                z: 22.0 - 7.0 * t,
                y: t,
                shake: 0.3 + (1.0 - smoothstep(0.0, 1.0, t)) * 0.1,
            },
            Self::Hover => CameraTarget {
                z: 15.0 - 10.0 * t,
                y: 1.0 - t,
                shake: 0.2 + 0.5 * t,
            },
            Self::Translation => CameraTarget {
                z: 5.0 - 205.0 * t,
                y: 0.0,
                shake: 0.5 + (t * 10.0).sin() * 0.2,
            },
            Self::Deceleration => CameraTarget {
                z: -200.0 - 400.0 * ease_out_cubic(t),
                y: (t * 2.0).sin() * 20.0,
                shake: 0.05 + (1.0 - t) * 0.2,
            },
        }
    }
}

/// Where the camera wants to be at a given progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    /// Target depth along the flight axis.
    pub z: f32,
    /// Target height.
    pub y: f32,
    /// Base shake amplitude before scaling.
    pub shake: f32,
}

impl CameraTarget {
    /// Target position on the flight axis (`x` is always 0).
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::new(0.0, self.y, self.z)
    }
}

/// Target camera offset and shake at `progress`.
#[must_use]
pub fn target_at(progress: f32) -> CameraTarget {
    let p = progress.clamp(0.0, 1.0);
    CameraSegment::of(p).evaluate(p)
}

/// Look-at point for the given progress and target depth.
#[must_use]
pub fn look_at_at(progress: f32, target_z: f32) -> Vec3 {
    if progress > DEEP_FIELD_LOCK {
        DEEP_FIELD_POINT
    } else {
        Vec3::new(0.0, 0.0, target_z - LOOK_AHEAD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn adjacent_segments_agree_at_boundaries() {
        for pair in CameraSegment::ALL.windows(2) {
            let (left, right) = (pair[0], pair[1]);
            let boundary = left.range().1;
            assert_eq!(boundary, right.range().0);
            let a = left.evaluate(boundary);
            let b = right.evaluate(boundary);
            assert!(
                (a.z - b.z).abs() < EPS,
                "z pops at {boundary}: {} vs {}",
                a.z,
                b.z
            );
            assert!(
                (a.y - b.y).abs() < EPS,
                "y pops at {boundary}: {} vs {}",
                a.y,
                b.y
            );
        }
    }

    #[test]
    fn path_is_continuous_under_fine_sampling() {
        let mut prev = target_at(0.0);
        for i in 1..=100_000 {
            let next = target_at(i as f32 / 100_000.0);
            // Steepest slope is the start of the deceleration, ~4800/unit.
            assert!((next.z - prev.z).abs() < 0.1);
            assert!((next.y - prev.y).abs() < 0.1);
            prev = next;
        }
    }

    #[test]
    fn segment_endpoints() {
        assert!((target_at(0.0).z - 30.0).abs() < EPS);
        assert!((target_at(0.20).z - 22.0).abs() < EPS);
        assert!((target_at(0.40).z - 15.0).abs() < EPS);
        assert!((target_at(0.40).y - 1.0).abs() < EPS);
        assert!((target_at(0.60).z - 5.0).abs() < EPS);
        assert!((target_at(0.75).z + 200.0).abs() < EPS);
        assert!((target_at(1.0).z + 600.0).abs() < EPS);
    }

    #[test]
    fn horizon_midpoint() {
        let target = target_at(0.5);
        assert_eq!(CameraSegment::of(0.5), CameraSegment::Hover);
        assert!((target.z - 10.0).abs() < EPS);
        assert!((target.y - 0.5).abs() < EPS);
        assert!((target.shake - 0.45).abs() < EPS);
    }

    #[test]
    fn look_at_switches_to_deep_field() {
        assert_eq!(look_at_at(0.5, 10.0), Vec3::new(0.0, 0.0, -40.0));
        assert_eq!(look_at_at(0.8, -300.0), Vec3::new(0.0, 0.0, -350.0));
        assert_eq!(look_at_at(0.81, -300.0), DEEP_FIELD_POINT);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(target_at(-1.0), target_at(0.0));
        assert_eq!(target_at(3.0), target_at(1.0));
    }
}
