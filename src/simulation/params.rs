//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - artistic gravitational constant and speed of light (`G`, `c`),
//! - the mass of the first primary (the second one follows from the mass ratio),
//! - the radiation damping coefficient and merger mass-loss fraction,
//! - particle ensemble sizes and the random seed

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub c: f64, // speed of light, only used by the radiation loss term
    pub primary_mass: f64, // mass of the first primary
    pub radiation_damping: f64, // scales the Peters-Mathews loss into a per-step velocity damping
    pub mass_loss: f64, // fraction of total mass radiated away at merger
    pub disk_particles: usize, // particles per disk ensemble
    pub flare_particles: usize, // particles in the merger flare
    pub seed: u64, // deterministic seed
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: 400.0,
            c: 30.0,
            primary_mass: 12.0,
            radiation_damping: 0.001,
            mass_loss: 0.05,
            disk_particles: 20_000,
            flare_particles: 5_000,
            seed: 42,
        }
    }
}
