//! Procedural point clouds.
//!
//! Every generator takes an explicit seed so a given [`GeometryOptions`]
//! always produces the same clouds.
//!
//! [`GeometryOptions`]: crate::options::GeometryOptions

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Radius of the double helix the halo reassembles into.
pub const HELIX_RADIUS: f32 = 2.5;
/// Length of the helix along x.
pub const HELIX_LENGTH: f32 = 35.0;
/// Helix turns expressed as total angle (six full turns).
pub const HELIX_SWEEP: f32 = 12.0 * PI;
/// Outer radius of the child galaxy.
pub const GALAXY_RADIUS: f32 = 80.0;
/// Number of galaxy spiral arms.
pub const GALAXY_ARMS: usize = 3;

/// Per-point attribute arrays for one point-cloud layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    /// Rest positions.
    pub positions: Vec<Vec3>,
    /// Secondary target positions (the helix shape); empty when unused.
    pub targets: Vec<Vec3>,
    /// Per-point size factor.
    pub sizes: Vec<f32>,
    /// Per-point colour (linear RGB).
    pub colors: Vec<Vec3>,
    /// Per-point random phase in `[0, 1)`.
    pub randomness: Vec<f32>,
}

impl PointCloud {
    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the cloud has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    fn with_capacity(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count),
            targets: Vec::new(),
            sizes: Vec::with_capacity(count),
            colors: Vec::with_capacity(count),
            randomness: Vec::with_capacity(count),
        }
    }
}

/// `#rrggbb` to an RGB vector in `[0, 1]`.
#[must_use]
pub fn rgb(hex: u32) -> Vec3 {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    Vec3::new(channel(16), channel(8), channel(0))
}

fn rng_for(seed: u64, salt: u64) -> StdRng {
    StdRng::seed_from_u64(seed ^ salt)
}

/// Uniform random point on a sphere shell of radius `r`.
fn on_sphere(rng: &mut StdRng, r: f32) -> Vec3 {
    let theta = rng.random::<f32>() * TAU;
    let phi = (2.0 * rng.random::<f32>() - 1.0).acos();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

fn signed_cube(rng: &mut StdRng) -> f32 {
    let magnitude = rng.random::<f32>().powi(3);
    if rng.random_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

fn jitter(rng: &mut StdRng) -> f32 {
    rng.random::<f32>() - 0.5
}

/// The ancestral halo (rest positions) paired with the double helix
/// (targets).
///
/// Halo points sit in a flattened shell with radius in `[8, 18)`. Helix
/// targets alternate between two strands half a turn apart, spread along
/// x, with ±0.5 jitter on every axis.
#[must_use]
pub fn halo_and_helix(count: usize, seed: u64) -> PointCloud {
    let mut rng = rng_for(seed, 0x01);
    let mut cloud = PointCloud::with_capacity(count);
    cloud.targets.reserve(count);
    let base = rgb(0x33_99ff);

    for i in 0..count {
        let r = 8.0 + rng.random::<f32>() * 10.0;
        let mut halo = on_sphere(&mut rng, r);
        halo.y *= 0.6;

        let u = i as f32 / count as f32;
        let strand = if i % 2 == 0 { 0.0 } else { PI };
        let angle = u * HELIX_SWEEP + strand;
        let helix = Vec3::new(
            (u - 0.5) * HELIX_LENGTH,
            angle.sin() * HELIX_RADIUS,
            angle.cos() * HELIX_RADIUS,
        ) + Vec3::new(jitter(&mut rng), jitter(&mut rng), jitter(&mut rng));

        cloud.positions.push(halo);
        cloud.targets.push(helix);
        cloud.sizes.push(rng.random());
        cloud.colors.push(base);
        cloud.randomness.push(rng.random());
    }
    cloud
}

/// Three-arm spiral galaxy of radius [`GALAXY_RADIUS`].
///
/// Colour runs from a gold core to blue arms, with one point in five
/// pulled halfway toward magenta dust.
#[must_use]
pub fn galaxy(count: usize, seed: u64) -> PointCloud {
    let mut rng = rng_for(seed, 0x02);
    let mut cloud = PointCloud::with_capacity(count);
    let core = rgb(0xff_cc00);
    let arm = rgb(0x00_88ff);
    let dust = rgb(0xff_0066);
    let branch_step = TAU / GALAXY_ARMS as f32;

    for i in 0..count {
        let radius = rng.random::<f32>() * GALAXY_RADIUS;
        let spin = radius * 0.5;
        let branch = (i % GALAXY_ARMS) as f32 * branch_step;
        let spread = 15.0 - radius * 0.1;
        let offset = Vec3::new(
            signed_cube(&mut rng) * spread,
            signed_cube(&mut rng) * spread,
            signed_cube(&mut rng) * spread,
        );

        let position = Vec3::new(
            (branch + spin).cos() * radius + offset.x,
            offset.y * 0.8,
            (branch + spin).sin() * radius + offset.z,
        );

        let mut color = core.lerp(arm, radius / GALAXY_RADIUS);
        if rng.random::<f32>() > 0.8 {
            color = color.lerp(dust, 0.5);
        }

        cloud.positions.push(position);
        cloud.colors.push(color);
        cloud.sizes.push(rng.random());
        cloud.randomness.push(rng.random());
    }
    cloud
}

/// Streaks lining the wormhole: radius `[4, 10)` around the z axis, spread
/// over z ∈ `[-150, 150)`.
#[must_use]
pub fn tunnel_sparks(count: usize, seed: u64) -> PointCloud {
    let mut rng = rng_for(seed, 0x03);
    let mut cloud = PointCloud::with_capacity(count);
    let color = rgb(0xff_cc88);

    for _ in 0..count {
        let theta = rng.random::<f32>() * TAU;
        let r = 4.0 + rng.random::<f32>() * 6.0;
        let z = (rng.random::<f32>() - 0.5) * 300.0;
        cloud.positions.push(Vec3::new(r * theta.cos(), r * theta.sin(), z));
        cloud.sizes.push(0.15);
        cloud.colors.push(color);
        cloud.randomness.push(rng.random());
    }
    cloud
}

/// Distant star shell with radius in `[100, 300)`.
#[must_use]
pub fn background_shell(count: usize, seed: u64) -> PointCloud {
    let mut rng = rng_for(seed, 0x04);
    let mut cloud = PointCloud::with_capacity(count);
    let color = rgb(0x88_ccff);

    for _ in 0..count {
        let r = 100.0 + rng.random::<f32>() * 200.0;
        cloud.positions.push(on_sphere(&mut rng, r));
        cloud.sizes.push(0.2);
        cloud.colors.push(color);
        cloud.randomness.push(rng.random());
    }
    cloud
}
