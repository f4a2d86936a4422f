//! The distant star field. Static and always on.

use super::geometry::{background_shell, PointCloud};
use super::params::LayerParams;
use super::{Layer, LayerId};
use crate::timeline::FrameSnapshot;

/// Fixed star-field opacity.
pub const OPACITY: f32 = 0.4;

/// Layer owning the background shell.
#[derive(Debug)]
pub struct BackgroundLayer {
    cloud: PointCloud,
}

impl BackgroundLayer {
    /// Generate `count` stars from `seed`.
    #[must_use]
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            cloud: background_shell(count, seed),
        }
    }
}

impl Layer for BackgroundLayer {
    fn id(&self) -> LayerId {
        LayerId::BackgroundField
    }

    fn update(&mut self, frame: &FrameSnapshot) -> LayerParams {
        LayerParams::new(self.id(), true, OPACITY, 0.0)
            .with_clock(frame.elapsed, frame.progress)
    }

    fn points(&self) -> Option<&PointCloud> {
        Some(&self.cloud)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_visible_at_fixed_opacity() {
        let mut layer = BackgroundLayer::new(10, 0);
        for p in [0.0, 0.3, 0.6, 0.9, 1.0] {
            let params = layer.update(&FrameSnapshot::at(p, 0.0));
            assert!(params.visible);
            assert_eq!(params.intensity, OPACITY);
        }
    }
}
