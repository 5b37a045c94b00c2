//! One-shot merger flare
//!
//! A burst of ballistic particles released from the merger point. The whole
//! ensemble shares one opacity scalar that fades after the trigger.

use std::f64::consts::TAU;

use rand::Rng;

use super::states::NVec3;

/// Upper bound of the launch speed
pub const MAX_FLARE_SPEED: f64 = 80.0;

/// Opacity lost per simulated second
pub const FLARE_FADE_RATE: f64 = 0.8;

#[derive(Debug, Clone)]
pub struct FlareParticleSystem {
    pub origin: NVec3, // world position of the burst
    pub positions: Vec<NVec3>, // relative to origin
    pub velocities: Vec<NVec3>,
    pub opacity: f64, // shared life of the whole ensemble
}

impl FlareParticleSystem {
    /// Inert burst of `n` particles
    pub fn new(n: usize) -> Self {
        Self {
            origin: NVec3::zeros(),
            positions: vec![NVec3::zeros(); n],
            velocities: vec![NVec3::zeros(); n],
            opacity: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.opacity > 0.0
    }

    /// Fire the burst at `position`: every particle restarts at the origin
    /// with a uniformly random direction and a speed in `[0, 80]`
    pub fn trigger<R: Rng + ?Sized>(&mut self, position: NVec3, rng: &mut R) {
        self.origin = position;
        self.opacity = 1.0;

        for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            // uniform on the sphere: z uniform in [-1, 1], azimuth uniform
            let z = rng.gen_range(-1.0f64..=1.0);
            let phi = rng.gen::<f64>() * TAU;
            let ring = (1.0 - z * z).max(0.0).sqrt();
            let dir = NVec3::new(ring * phi.cos(), ring * phi.sin(), z);

            *v = dir * (rng.gen::<f64>() * MAX_FLARE_SPEED);
            *p = NVec3::zeros();
        }
    }

    /// Fade and drift the burst; nothing happens once the opacity is spent
    pub fn update(&mut self, dt: f64) {
        if self.opacity <= 0.0 {
            return;
        }
        self.opacity = (self.opacity - FLARE_FADE_RATE * dt).max(0.0);

        for (p, v) in self.positions.iter_mut().zip(self.velocities.iter()) {
            *p += v * dt;
        }
    }

    /// World-space particle positions
    pub fn world_positions(&self) -> impl Iterator<Item = NVec3> + '_ {
        self.positions.iter().map(move |p| self.origin + p)
    }
}
