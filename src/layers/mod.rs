//! Visual layers and their per-frame parameter derivation.
//!
//! Every layer maps the frame's progress (and wall time, for texture
//! animation) to the parameters its renderer needs. Layers read only the
//! shared [`FrameSnapshot`]; none of them can observe or influence another.
//!
//! The set of layers is fixed at construction by [`LayerRegistry`], in draw
//! order.

/// Distant star field.
pub mod background;
/// Lightning inside the wormhole.
pub mod electric_arcs;
/// Black hole and accretion disk.
pub mod event_horizon;
/// Child-universe galaxy.
pub mod galaxy;
/// Seeded point-cloud generators.
pub mod geometry;
/// Per-layer render parameters and uniforms.
pub mod params;
/// Halo particles that reassemble into a helix.
pub mod particles;
/// Expanding collapse ring.
pub mod shockwave;
/// The ancestral star.
pub mod star_core;
/// Sparks streaming through the tunnel.
pub mod tunnel_sparks;
/// Wormhole tunnel.
pub mod wormhole;

use serde::Serialize;

pub use geometry::PointCloud;
pub use params::{LayerParams, LayerTransform, LayerUniform};

use self::background::BackgroundLayer;
use self::electric_arcs::ElectricArcsLayer;
use self::event_horizon::EventHorizonLayer;
use self::galaxy::GalaxyLayer;
use self::particles::ParticleHelixLayer;
use self::shockwave::ShockwaveLayer;
use self::star_core::StarCoreLayer;
use self::tunnel_sparks::TunnelSparksLayer;
use self::wormhole::WormholeLayer;
use crate::options::GeometryOptions;
use crate::timeline::FrameSnapshot;

/// Identifies one of the fixed visual layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerId {
    /// Distant star shell.
    BackgroundField,
    /// Ancestral star sphere.
    StarCore,
    /// Halo/helix particle cloud.
    ParticleHelix,
    /// Black hole and disk.
    EventHorizon,
    /// Collapse ring billboard.
    Shockwave,
    /// Tunnel mesh.
    Wormhole,
    /// Lightning cylinder.
    ElectricArcs,
    /// Streaks inside the tunnel.
    TunnelSparks,
    /// Child galaxy.
    Galaxy,
}

impl LayerId {
    /// Every layer, in draw order.
    pub const ALL: [Self; 9] = [
        Self::BackgroundField,
        Self::StarCore,
        Self::ParticleHelix,
        Self::EventHorizon,
        Self::Shockwave,
        Self::Wormhole,
        Self::ElectricArcs,
        Self::TunnelSparks,
        Self::Galaxy,
    ];
}

/// A visual element driven by the timeline.
///
/// `update` runs once per frame with the shared snapshot. Most layers are
/// pure functions of it; the particle helix and tunnel sparks additionally
/// keep render-handle state (a smoothed progress and spark positions).
pub trait Layer: Send + Sync {
    /// Which layer this is.
    fn id(&self) -> LayerId;

    /// Derive this frame's parameters.
    fn update(&mut self, frame: &FrameSnapshot) -> LayerParams;

    /// The layer's point cloud, for point-sprite layers.
    fn points(&self) -> Option<&PointCloud> {
        None
    }
}

/// The fixed, ordered set of layers.
pub struct LayerRegistry {
    layers: Vec<Box<dyn Layer>>,
}

impl LayerRegistry {
    /// Build every layer, generating point clouds from `geometry`.
    #[must_use]
    pub fn new(geometry: &GeometryOptions) -> Self {
        let seed = geometry.seed;
        let layers: Vec<Box<dyn Layer>> = vec![
            Box::new(BackgroundLayer::new(geometry.background_count, seed)),
            Box::new(StarCoreLayer),
            Box::new(ParticleHelixLayer::new(geometry.particle_count, seed)),
            Box::new(EventHorizonLayer),
            Box::new(ShockwaveLayer),
            Box::new(WormholeLayer),
            Box::new(ElectricArcsLayer),
            Box::new(TunnelSparksLayer::new(geometry.spark_count, seed)),
            Box::new(GalaxyLayer::new(geometry.galaxy_count, seed)),
        ];
        log::debug!(
            "built {} layers ({} particles, {} galaxy stars)",
            layers.len(),
            geometry.particle_count,
            geometry.galaxy_count,
        );
        Self { layers }
    }

    /// Update every layer in draw order.
    pub fn update(&mut self, frame: &FrameSnapshot) -> Vec<LayerParams> {
        self.layers.iter_mut().map(|l| l.update(frame)).collect()
    }

    /// Look up a layer by id.
    #[must_use]
    pub fn get(&self, id: LayerId) -> Option<&dyn Layer> {
        self.layers
            .iter()
            .find(|l| l.id() == id)
            .map(|l| &**l)
    }

    /// Layer ids in draw order.
    pub fn ids(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.layers.iter().map(|l| l.id())
    }
}

impl std::fmt::Debug for LayerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerRegistry")
            .field("layers", &self.ids().collect::<Vec<_>>())
            .finish()
    }
}
