use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Point counts and seed for the procedural point clouds.
pub struct GeometryOptions {
    /// Seed for every procedural generator; equal seeds give equal clouds.
    #[schemars(skip)]
    pub seed: u64,
    /// Particles in the halo that morphs into the helix.
    #[schemars(title = "Helix Particles", range(min = 1000, max = 60000), extend("step" = 1000))]
    pub particle_count: usize,
    /// Stars in the child-universe galaxy.
    #[schemars(title = "Galaxy Stars", range(min = 1000, max = 80000), extend("step" = 1000))]
    pub galaxy_count: usize,
    /// Streaks inside the tunnel.
    #[schemars(title = "Tunnel Sparks", range(min = 100, max = 5000), extend("step" = 100))]
    pub spark_count: usize,
    /// Distant background stars.
    #[schemars(title = "Background Stars", range(min = 500, max = 10000), extend("step" = 500))]
    pub background_count: usize,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            seed: 0x6E_6573_6973,
            particle_count: 30_000,
            galaxy_count: 40_000,
            spark_count: 1_500,
            background_count: 5_000,
        }
    }
}
