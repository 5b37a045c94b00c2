//! Core state types for the merger simulation.
//!
//! Defines the physical body, the three fixed body slots and the single
//! `SimulationState` that every tick mutates:
//! - `Body`            position/velocity/mass with a radius derived from mass
//! - `BodySlot`        primary, secondary and the pre-allocated remnant
//! - `Phase`           inspiral -> merger -> ringdown
//! - `SimulationState` bodies, disks, flare, phase clock and effect signals

use std::fmt;

use nalgebra::Vector3;

use super::disk::DiskParticleSystem;
use super::flare::FlareParticleSystem;
use super::signals::{LensTarget, Signals, SystemInfo};

pub type NVec3 = Vector3<f64>;

/// Artistic stand-in for the Schwarzschild radius: `m^0.7 * 0.8`
pub fn radius_for_mass(m: f64) -> f64 {
    m.powf(0.7) * 0.8
}

/// One massive body. The radius is never set on its own, it always follows the mass
#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub visible: bool,
    m: f64,      // mass
    radius: f64, // derived from m
}

impl Body {
    pub fn new(m: f64, x: NVec3, v: NVec3) -> Self {
        Self {
            x,
            v,
            visible: true,
            m,
            radius: radius_for_mass(m),
        }
    }

    pub fn m(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Change the mass and recompute the radius with it
    pub fn set_mass(&mut self, m: f64) {
        self.m = m;
        self.radius = radius_for_mass(m);
    }

    pub fn momentum(&self) -> NVec3 {
        self.v * self.m
    }

    /// Ballistic drift: x += v * dt
    pub fn drift(&mut self, dt: f64) {
        self.x += self.v * dt;
    }
}

/// Index into the three fixed body slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodySlot {
    Primary,
    Secondary,
    Remnant,
}

impl BodySlot {
    pub const ALL: [BodySlot; 3] = [BodySlot::Primary, BodySlot::Secondary, BodySlot::Remnant];

    pub fn index(self) -> usize {
        match self {
            BodySlot::Primary => 0,
            BodySlot::Secondary => 1,
            BodySlot::Remnant => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Inspiral,
    Merger,
    Ringdown,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Inspiral => "Inspiral",
            Phase::Merger => "MERGER!",
            Phase::Ringdown => "Ringdown",
        };
        f.write_str(label)
    }
}

/// Mass ratio and initial separation the state was built from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binary {
    pub mass_ratio: f64,
    pub separation: f64,
}

/// Everything one tick reads and writes.
///
/// Built whole by `Scenario::reset`, never patched field by field from outside
/// the simulation module, so a reader only ever sees a complete state.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub phase: Phase,
    pub phase_time: f64, // simulated seconds in the current phase
    pub progress: f64,   // 0..1 over the whole run
    pub config: Binary,
    pub bodies: [Body; 3],
    pub disks: [DiskParticleSystem; 3],
    pub flare: FlareParticleSystem,
    pub signals: Signals,
    pub remnant_scale: f64, // visual scale of the remnant, grows during merger
}

impl SimulationState {
    pub fn body(&self, slot: BodySlot) -> &Body {
        &self.bodies[slot.index()]
    }

    pub fn body_mut(&mut self, slot: BodySlot) -> &mut Body {
        &mut self.bodies[slot.index()]
    }

    pub fn disk(&self, slot: BodySlot) -> &DiskParticleSystem {
        &self.disks[slot.index()]
    }

    /// Bodies taking part in physics this phase
    pub fn active_slots(&self) -> &'static [BodySlot] {
        match self.phase {
            Phase::Inspiral => &[BodySlot::Primary, BodySlot::Secondary],
            Phase::Merger | Phase::Ringdown => &[BodySlot::Remnant],
        }
    }

    /// Mass-weighted centre of the two primaries
    pub fn primaries_com(&self) -> NVec3 {
        let b1 = self.body(BodySlot::Primary);
        let b2 = self.body(BodySlot::Secondary);
        (b1.x * b1.m() + b2.x * b2.m()) / (b1.m() + b2.m())
    }

    /// Current distance between the primaries
    pub fn separation(&self) -> f64 {
        (self.body(BodySlot::Secondary).x - self.body(BodySlot::Primary).x).norm()
    }

    /// Visual scale of a body: physical radius, except for the growing remnant
    pub fn display_scale(&self, slot: BodySlot) -> f64 {
        match slot {
            BodySlot::Remnant => self.remnant_scale,
            _ => self.body(slot).radius(),
        }
    }

    /// Mass/radius/position pairs for the lensing effect
    pub fn lensing_targets(&self) -> Vec<LensTarget> {
        self.active_slots()
            .iter()
            .map(|&slot| {
                let b = self.body(slot);
                LensTarget {
                    position: b.x,
                    mass: b.m(),
                    radius: b.radius(),
                }
            })
            .collect()
    }

    /// Total mass, separation and orbital period for the status display
    #[allow(non_snake_case)]
    pub fn system_info(&self, G: f64) -> SystemInfo {
        match self.phase {
            Phase::Inspiral => {
                let total_mass = self.body(BodySlot::Primary).m() + self.body(BodySlot::Secondary).m();
                let r = self.separation();
                let period = 2.0 * std::f64::consts::PI * (r.powi(3) / (G * total_mass)).sqrt();
                SystemInfo {
                    total_mass,
                    separation: Some(r),
                    orbital_period: Some(period),
                }
            }
            Phase::Merger | Phase::Ringdown => SystemInfo {
                total_mass: self.body(BodySlot::Remnant).m(),
                separation: None,
                orbital_period: None,
            },
        }
    }
}
