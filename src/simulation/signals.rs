//! Scalar outputs for the effect and status collaborators
//!
//! Recomputed every tick from the authoritative state; nothing here feeds
//! back into the physics.

use super::states::NVec3;

/// Wave frequency at reset
pub const INITIAL_WAVE_FREQUENCY: f64 = 30.0;

/// Bloom intensity at rest; ringdown decays back to it
pub const BLOOM_FLOOR: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSignal {
    pub amplitude: f64,
    pub frequency: f64,
    pub time: f64, // sum of every ticked dt
    pub origin: NVec3, // world-space source of the waves
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    pub wave: WaveSignal,
    pub bloom: f64,
}

impl Default for Signals {
    fn default() -> Self {
        Self {
            wave: WaveSignal {
                amplitude: 0.0,
                frequency: INITIAL_WAVE_FREQUENCY,
                time: 0.0,
                origin: NVec3::zeros(),
            },
            bloom: BLOOM_FLOOR,
        }
    }
}

/// One lensing source, projected to screen space by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensTarget {
    pub position: NVec3,
    pub mass: f64,
    pub radius: f64,
}

/// Values for the status display; separation and period only exist during inspiral
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemInfo {
    pub total_mass: f64,
    pub separation: Option<f64>,
    pub orbital_period: Option<f64>,
}
