//! Merger conservation step
//!
//! Combines the two primaries into the remnant: momentum and centre of mass
//! are carried over, a fixed fraction of the total mass is radiated away.

use super::states::{radius_for_mass, Body, NVec3};

/// Wave amplitude handed to the effects layer at the merger
pub const MERGER_WAVE_AMPLITUDE: f64 = 0.05;

/// Wave frequency handed to the effects layer at the merger
pub const MERGER_WAVE_FREQUENCY: f64 = 60.0;

/// Bloom intensity spike at the merger
pub const MERGER_BLOOM: f64 = 3.5;

/// Physical state of the remnant right after the merger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Remnant {
    pub mass: f64,
    pub radius: f64,
    pub x: NVec3, // centre of mass of the primaries
    pub v: NVec3, // total momentum / remnant mass
}

/// Conservation step applied to the two primaries at the merger trigger.
///
/// The velocity divides the total momentum by the *remnant* mass, so the
/// remnant moves slightly faster than the centre of mass did.
pub fn merge(b1: &Body, b2: &Body, mass_loss: f64) -> Remnant {
    let initial_mass = b1.m() + b2.m();
    let momentum = b1.momentum() + b2.momentum();
    let com = (b1.x * b1.m() + b2.x * b2.m()) / initial_mass;

    let mass = initial_mass * (1.0 - mass_loss);

    Remnant {
        mass,
        radius: radius_for_mass(mass),
        x: com,
        v: momentum / mass,
    }
}

/// Write the remnant into its pre-allocated body slot and make it visible
pub fn apply_remnant(body: &mut Body, remnant: &Remnant) {
    body.set_mass(remnant.mass);
    body.x = remnant.x;
    body.v = remnant.v;
    body.visible = true;
}
