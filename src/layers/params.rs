use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::Serialize;

use super::LayerId;

/// Per-layer shader uniform block.
///
/// Layout matches a WGSL struct of eight `f32`s (32 bytes, 16-byte aligned),
/// so the renderer can upload it with `bytemuck::bytes_of`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize)]
pub struct LayerUniform {
    /// Animation time in seconds, already scaled by the layer's speed factor.
    pub time: f32,
    /// Progress the layer was derived from (smoothed for the particle helix).
    pub progress: f32,
    /// Overall opacity/intensity in `[0, 1]`.
    pub intensity: f32,
    /// Colour blend factor in `[0, 1]`.
    pub color_mix: f32,
    /// Layer-specific scalars; see each layer for the slot meaning.
    pub extra: [f32; 4],
}

/// Object placement of a layer's mesh or point cloud.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerTransform {
    /// World-space translation.
    pub translation: Vec3,
    /// XYZ Euler rotation in radians.
    pub rotation: Vec3,
    /// Uniform scale.
    pub scale: f32,
}

impl LayerTransform {
    /// No translation, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: 1.0,
    };

    /// Model matrix for this transform.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            rotation,
            self.translation,
        )
    }
}

impl Default for LayerTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Everything the renderer needs to draw one layer for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerParams {
    /// Which layer produced these parameters.
    pub layer: LayerId,
    /// Whether the layer is drawn at all this frame.
    pub visible: bool,
    /// Opacity/intensity, clamped to `[0, 1]`.
    pub intensity: f32,
    /// Colour blend factor, clamped to `[0, 1]`.
    pub color_mix: f32,
    /// Model transform.
    pub transform: LayerTransform,
    /// Shader uniform block.
    pub uniform: LayerUniform,
}

fn unit(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

impl LayerParams {
    /// Parameters with `intensity` and `color_mix` clamped to `[0, 1]`
    /// and mirrored into the uniform block.
    #[must_use]
    pub fn new(
        layer: LayerId,
        visible: bool,
        intensity: f32,
        color_mix: f32,
    ) -> Self {
        let intensity = unit(intensity);
        let color_mix = unit(color_mix);
        Self {
            layer,
            visible,
            intensity,
            color_mix,
            transform: LayerTransform::IDENTITY,
            uniform: LayerUniform {
                intensity,
                color_mix,
                ..LayerUniform::zeroed()
            },
        }
    }

    /// A layer that is not drawn this frame.
    #[must_use]
    pub fn hidden(layer: LayerId) -> Self {
        Self::new(layer, false, 0.0, 0.0)
    }

    /// Replace the model transform.
    #[must_use]
    pub fn with_transform(mut self, transform: LayerTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the uniform time and progress.
    #[must_use]
    pub fn with_clock(mut self, time: f32, progress: f32) -> Self {
        self.uniform.time = time;
        self.uniform.progress = progress;
        self
    }

    /// Set the layer-specific uniform slots.
    #[must_use]
    pub fn with_extra(mut self, extra: [f32; 4]) -> Self {
        self.uniform.extra = extra;
        self
    }
}
