//! Fixed-step two-body integrator for the inspiral
//!
//! Advances the two primaries under mutual gravity plus the artificial
//! radiation damping with a semi-implicit Euler step, and detects the
//! merger condition before touching either body

use super::forces::{gravity_magnitude, radiation_loss, unit_or_zero, MIN_DISTANCE};
use super::params::Parameters;
use super::states::Body;

/// Bodies merge once they are closer than this many times the sum of their radii
pub const MERGER_RADIUS_FACTOR: f64 = 1.2;

/// Cap on the inspiral wave amplitude
pub const MAX_INSPIRAL_AMPLITUDE: f64 = 0.02;

/// Result of one inspiral step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InspiralStep {
    /// Bodies are inside the merger distance; nothing was integrated
    Merger { separation: f64 },
    /// Bodies were advanced; signals computed from the pre-step separation
    Advanced { separation: f64, progress: f64, amplitude: f64 },
}

/// Separation below which two bodies merge
pub fn merger_distance(b1: &Body, b2: &Body) -> f64 {
    MERGER_RADIUS_FACTOR * (b1.radius() + b2.radius())
}

/// Normalized inspiral progress: 0 at the initial separation, 1 at the merger distance
pub fn inspiral_progress(r: f64, initial_separation: f64, merger_dist: f64) -> f64 {
    let span = (initial_separation - merger_dist).max(MIN_DISTANCE);
    (1.0 - (r - merger_dist) / span).clamp(0.0, 1.0)
}

/// Wave amplitude during inspiral, growing as `(initial / r)^2` and capped
pub fn inspiral_amplitude(r: f64, initial_separation: f64) -> f64 {
    let ratio = initial_separation / r.max(MIN_DISTANCE);
    (0.001 * ratio * ratio).min(MAX_INSPIRAL_AMPLITUDE)
}

/// Advance both primaries by one step `dt`.
///
/// Kick: `v += ±F/m * dt` along the separation, then the radiation damping
/// scales both velocities, then drift: `x += v * dt`.
pub fn inspiral_step(
    b1: &mut Body,
    b2: &mut Body,
    dt: f64,
    params: &Parameters,
    initial_separation: f64,
) -> InspiralStep {
    // d points from body 1 to body 2
    let d = b2.x - b1.x;
    let r = d.norm();

    let merger_dist = merger_distance(b1, b2);
    if r < merger_dist {
        return InspiralStep::Merger { separation: r };
    }

    let (m1, m2) = (b1.m(), b2.m());
    let dir = unit_or_zero(&d);

    // Equal and opposite impulses
    let f = gravity_magnitude(params.G, m1, m2, r);
    b1.v += dir * (f / m1 * dt);
    b2.v -= dir * (f / m2 * dt);

    // Radiation loss as velocity damping, kept inside [0, 1]
    let loss = radiation_loss(params.G, params.c, m1, m2, r);
    let damping = (1.0 - loss * dt * params.radiation_damping).clamp(0.0, 1.0);
    b1.v *= damping;
    b2.v *= damping;

    b1.drift(dt);
    b2.drift(dt);

    InspiralStep::Advanced {
        separation: r,
        progress: inspiral_progress(r, initial_separation, merger_dist),
        amplitude: inspiral_amplitude(r, initial_separation),
    }
}
