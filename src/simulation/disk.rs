//! Accretion disk particle ensemble bound to one body
//!
//! Fixed-size structure-of-arrays; indices stay stable for the lifetime of
//! the ensemble. Positions are stored relative to the owning body.

use std::f64::consts::TAU;

use rand::Rng;

use super::forces::{keplerian_speed, orbital_tangent, CentralPull, ParticleAccelSet, TidalPull};
use super::states::{Body, NVec3};

/// Inner edge of the disk, in body radii
pub const INNER_EDGE: f64 = 2.5;

/// Radial width of the disk, in body radii
pub const DISK_WIDTH: f64 = 8.0;

/// Particles closer than this many body radii are swallowed
pub const ABSORPTION_RADIUS: f64 = 1.5;

/// Vertical half-thickness at the inner edge, in body radii
pub const VERTICAL_SPREAD: f64 = 0.2;

/// Distance at which absorbed particles are parked, far outside anything visible
pub const SENTINEL_DISTANCE: f64 = 1.0e6;

/// Parking position for absorbed particles
pub fn sentinel() -> NVec3 {
    NVec3::new(SENTINEL_DISTANCE, 0.0, 0.0)
}

#[derive(Debug, Clone)]
pub struct DiskParticleSystem {
    pub positions: Vec<NVec3>, // relative to the owning body
    pub velocities: Vec<NVec3>, // last computed velocity
    pub life: Vec<f64>, // 1 active, 0 absorbed
    pub base_radius: Vec<f64>, // orbital radius at spawn
    pub angle: Vec<f64>, // azimuth at spawn
    pub mix: Vec<f64>, // radial gradient value for the renderer, 0 inner .. 1 outer
}

impl DiskParticleSystem {
    /// Inert ensemble of `n` particles; nothing moves until `initialize`
    pub fn new(n: usize) -> Self {
        Self {
            positions: vec![sentinel(); n],
            velocities: vec![NVec3::zeros(); n],
            life: vec![0.0; n],
            base_radius: vec![0.0; n],
            angle: vec![0.0; n],
            mix: vec![0.0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn is_alive(&self, i: usize) -> bool {
        self.life[i] > 0.0
    }

    pub fn active_count(&self) -> usize {
        self.life.iter().filter(|&&l| l > 0.0).count()
    }

    /// Scatter every particle into a thin disk around `body`.
    ///
    /// Radius is uniform in `[2.5 R, 10.5 R]`, azimuth uniform in `[0, 2π)`.
    /// The vertical jitter shrinks to zero at the inner edge so the disk
    /// flares slightly outward.
    pub fn initialize<R: Rng + ?Sized>(&mut self, body: &Body, rng: &mut R) {
        let radius = body.radius();
        let inner = radius * INNER_EDGE;
        let width = radius * DISK_WIDTH;

        for i in 0..self.len() {
            let r = inner + rng.gen::<f64>() * width;
            let angle = rng.gen::<f64>() * TAU;
            let normalized = (r - inner) / width;

            let y = (rng.gen::<f64>() - 0.5) * radius * VERTICAL_SPREAD * (1.0 - normalized);

            self.positions[i] = NVec3::new(angle.cos() * r, y, angle.sin() * r);
            self.velocities[i] = NVec3::zeros();
            self.life[i] = 1.0;
            self.base_radius[i] = r;
            self.angle[i] = angle;
            self.mix[i] = normalized.sqrt();
        }
    }

    /// Advance every live particle by `dt` around `body`, optionally pulled by
    /// a companion. Returns how many particles were absorbed this step.
    ///
    /// The orbital velocity is re-derived from the position every step rather
    /// than carried over; only this step's pull is added on top of it.
    #[allow(non_snake_case)]
    pub fn update(&mut self, body: &Body, dt: f64, G: f64, other: Option<&Body>) -> usize {
        let gm = G * body.m();
        let mut forces = ParticleAccelSet::new().with(CentralPull { gm });
        if let Some(other) = other {
            forces = forces.with(TidalPull {
                position: other.x,
                gm: G * other.m(),
            });
        }

        let absorb_radius = ABSORPTION_RADIUS * body.radius();
        let mut absorbed = 0;

        for i in 0..self.len() {
            if self.life[i] <= 0.0 {
                continue;
            }

            let local = self.positions[i];
            let world = body.x + local;
            let r = local.norm();

            // Keplerian base velocity from the current geometry
            let mut v = orbital_tangent(&local) * keplerian_speed(gm, r);
            v += forces.accumulate(&local, &world) * dt;

            let next = local + v * dt;
            self.velocities[i] = v;

            if next.norm() < absorb_radius {
                self.life[i] = 0.0;
                self.positions[i] = sentinel();
                absorbed += 1;
            } else {
                self.positions[i] = next;
            }
        }

        absorbed
    }

    /// World-space positions of the live particles around `body`
    pub fn world_positions<'a>(&'a self, body: &'a Body) -> impl Iterator<Item = NVec3> + 'a {
        self.positions
            .iter()
            .zip(self.life.iter())
            .filter(|(_, &life)| life > 0.0)
            .map(move |(p, _)| body.x + p)
    }
}
