use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, follow, and shake parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Distance from the origin at which the camera starts.
    #[schemars(skip)]
    pub start_distance: f32,
    /// Per-frame blend factor toward the path target.
    #[schemars(title = "Follow", range(min = 0.005, max = 1.0), extend("step" = 0.005))]
    pub follow: f32,
    /// Per-frame pull of the horizontal axis back to center; also smooths
    /// the shake envelope.
    #[schemars(title = "Recenter", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub recenter: f32,
    /// Multiplier applied to the path's shake amplitude.
    #[schemars(title = "Shake", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub shake_scale: f32,
    /// Horizontal shake frequency in radians per second.
    #[schemars(skip)]
    pub shake_freq_x: f32,
    /// Vertical shake frequency in radians per second.
    #[schemars(skip)]
    pub shake_freq_y: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 2000.0,
            start_distance: 12.0,
            follow: 0.03,
            recenter: 0.1,
            shake_scale: 0.3,
            shake_freq_x: 15.0,
            shake_freq_y: 13.0,
        }
    }
}
