//! Force / acceleration contributors for the merger engine
//!
//! Pair quantities for the two-body integrator (Newtonian attraction and the
//! simplified Peters-Mathews radiation loss) and the per-particle acceleration
//! terms that act on disk particles (central pull, tidal pull)

use super::states::NVec3;

/// Floor on any distance we divide by
pub const MIN_DISTANCE: f64 = 1.0e-6;

/// Floor on the radius used for the Keplerian speed of disk particles
pub const MIN_ORBIT_RADIUS: f64 = 0.1;

/// Floor on squared distances in particle accelerations
pub const MIN_DISTANCE_SQ: f64 = 0.01;

/// Unit vector along `v`, or zero when `v` is too short to have a direction
pub fn unit_or_zero(v: &NVec3) -> NVec3 {
    v.try_normalize(MIN_DISTANCE).unwrap_or_else(NVec3::zeros)
}

/// Magnitude of the mutual attraction `G m1 m2 / r^2`
#[allow(non_snake_case)]
pub fn gravity_magnitude(G: f64, m1: f64, m2: f64, r: f64) -> f64 {
    let r = r.max(MIN_DISTANCE);
    G * m1 * m2 / (r * r)
}

/// Simplified Peters-Mathews quadrupole loss: `32/5 G^4/c^5 m1 m2 (m1 + m2) / r^4`
#[allow(non_snake_case)]
pub fn radiation_loss(G: f64, c: f64, m1: f64, m2: f64, r: f64) -> f64 {
    let r = r.max(MIN_DISTANCE);
    (32.0 / 5.0) * (G.powi(4) / c.powi(5)) * (m1 * m2 * (m1 + m2)) / r.powi(4)
}

/// Circular orbit speed around a mass with `gm = G * M`
pub fn keplerian_speed(gm: f64, r: f64) -> f64 {
    (gm / r.max(MIN_ORBIT_RADIUS)).sqrt()
}

/// Prograde direction perpendicular to `local` in the orbital (x-z) plane
pub fn orbital_tangent(local: &NVec3) -> NVec3 {
    unit_or_zero(&NVec3::new(-local.z, 0.0, local.x))
}

/// Collection of per-particle acceleration terms.
/// Each term implements [`ParticleAcceleration`] and their contributions are
/// summed into one acceleration per particle
pub struct ParticleAccelSet {
    terms: Vec<Box<dyn ParticleAcceleration + Send + Sync>>,
}

impl Default for ParticleAccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleAccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl ParticleAcceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum of every term for a particle at `local` (relative to its body)
    /// and `world` (absolute) position
    pub fn accumulate(&self, local: &NVec3, world: &NVec3) -> NVec3 {
        self.terms
            .iter()
            .fold(NVec3::zeros(), |acc, term| acc + term.acceleration(local, world))
    }
}

/// Acceleration source acting on a single disk particle
pub trait ParticleAcceleration {
    fn acceleration(&self, local: &NVec3, world: &NVec3) -> NVec3;
}

/// Inward pull of the body that owns the disk
pub struct CentralPull {
    pub gm: f64, // G * body mass
}

impl ParticleAcceleration for CentralPull {
    fn acceleration(&self, local: &NVec3, _world: &NVec3) -> NVec3 {
        let r2 = local.norm_squared().max(MIN_DISTANCE_SQ);
        -unit_or_zero(local) * (self.gm / r2)
    }
}

/// Pull of the companion body on a particle of the other disk
pub struct TidalPull {
    pub position: NVec3, // companion world position
    pub gm: f64, // G * companion mass
}

impl ParticleAcceleration for TidalPull {
    fn acceleration(&self, _local: &NVec3, world: &NVec3) -> NVec3 {
        let to_other = self.position - world;
        let d2 = to_other.norm_squared().max(MIN_DISTANCE_SQ);
        unit_or_zero(&to_other) * (self.gm / d2)
    }
}
