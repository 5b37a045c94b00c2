//! Build fully-initialized merger scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the pair configuration used by the next reset (`Binary`)
//! - the live `SimulationState` and the random source behind it
//!
//! The frame callback drives it through [`Scenario::advance`]; the controls
//! go through the setters and [`Scenario::reset`].

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use tracing::{debug, info, warn};

use crate::configuration::config::ScenarioConfig;
use crate::simulation::disk::DiskParticleSystem;
use crate::simulation::engine::{Engine, MIN_CLOCK_VALUE};
use crate::simulation::flare::FlareParticleSystem;
use crate::simulation::params::Parameters;
use crate::simulation::phase::{phase_step, REMNANT_START_SCALE};
use crate::simulation::signals::{LensTarget, Signals, SystemInfo};
use crate::simulation::states::{Binary, Body, BodySlot, NVec3, Phase, SimulationState};

/// Smallest mass ratio or separation accepted from the controls
pub const MIN_BINARY_VALUE: f64 = 1.0e-3;

/// Mass the remnant slot holds until the merger fills it in
pub const PLACEHOLDER_REMNANT_MASS: f64 = 1.0;

/// What one ticked frame did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub dt: f64, // simulated seconds advanced
    pub phase: Phase, // phase after the tick
    pub progress: f64,
    pub entered: Option<Phase>, // phase entered during this tick
}

/// Initial bodies for a reset: both primaries on circular orbits about their
/// centre of mass at the origin, plus an invisible placeholder remnant
pub fn initial_bodies(binary: &Binary, params: &Parameters) -> [Body; 3] {
    let m1 = params.primary_mass;
    let m2 = m1 * binary.mass_ratio;
    let total_mass = m1 + m2;
    let sep = binary.separation;

    let x1 = NVec3::new(sep * (m2 / total_mass), 0.0, 0.0);
    let x2 = NVec3::new(-sep * (m1 / total_mass), 0.0, 0.0);

    let orbital_vel = (params.G * total_mass / sep).sqrt();
    let v1 = NVec3::new(0.0, 0.0, orbital_vel * (m2 / total_mass));
    let v2 = NVec3::new(0.0, 0.0, -orbital_vel * (m1 / total_mass));

    let mut remnant = Body::new(PLACEHOLDER_REMNANT_MASS, NVec3::zeros(), NVec3::zeros());
    remnant.visible = false;

    [Body::new(m1, x1, v1), Body::new(m2, x2, v2), remnant]
}

/// A complete state at the start of the inspiral, with both primary disks seeded
pub fn initial_state(binary: Binary, params: &Parameters, rng: &mut ChaChaRng) -> SimulationState {
    let bodies = initial_bodies(&binary, params);

    let mut disks = [
        DiskParticleSystem::new(params.disk_particles),
        DiskParticleSystem::new(params.disk_particles),
        DiskParticleSystem::new(params.disk_particles),
    ];
    for slot in [BodySlot::Primary, BodySlot::Secondary] {
        disks[slot.index()].initialize(&bodies[slot.index()], rng);
    }

    let mut state = SimulationState {
        phase: Phase::Inspiral,
        phase_time: 0.0,
        progress: 0.0,
        config: binary,
        bodies,
        disks,
        flare: FlareParticleSystem::new(params.flare_particles),
        signals: Signals::default(),
        remnant_scale: REMNANT_START_SCALE,
    };
    state.signals.wave.origin = state.primaries_com();
    state
}

fn positive_or_floor(name: &str, value: f64, floor: f64) -> f64 {
    if value > floor && value.is_finite() {
        value
    } else {
        warn!(name, value, floor, "clamping non-positive configuration value");
        floor
    }
}

/// Runtime bundle constructed from a [`ScenarioConfig`]: engine settings,
/// parameters, the pair used by the next reset and the live state
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    binary: Binary,
    state: SimulationState,
    rng: ChaChaRng,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            max_dt: positive_or_floor("max_dt", e_cfg.max_dt, MIN_CLOCK_VALUE),
            time_scale: positive_or_floor("time_scale", e_cfg.time_scale, MIN_CLOCK_VALUE),
            paused: false,
            disks_enabled: e_cfg.disks,
            lensing_enabled: e_cfg.lensing,
            waves_enabled: e_cfg.waves,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            c: p_cfg.c,
            primary_mass: positive_or_floor("primary_mass", p_cfg.primary_mass, MIN_BINARY_VALUE),
            radiation_damping: p_cfg.radiation_damping,
            mass_loss: p_cfg.mass_loss.clamp(0.0, 1.0 - MIN_BINARY_VALUE),
            disk_particles: p_cfg.disk_particles,
            flare_particles: p_cfg.flare_particles,
            seed: p_cfg.seed,
        };

        let binary = Binary {
            mass_ratio: positive_or_floor("mass_ratio", cfg.binary.mass_ratio, MIN_BINARY_VALUE),
            separation: positive_or_floor("separation", cfg.binary.separation, MIN_BINARY_VALUE),
        };

        let mut rng = ChaChaRng::seed_from_u64(parameters.seed);
        let state = initial_state(binary, &parameters, &mut rng);

        Self {
            engine,
            parameters,
            binary,
            state,
            rng,
        }
    }

    /// Read-only view of the live state
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Pair configuration the next reset will use
    pub fn binary(&self) -> Binary {
        self.binary
    }

    /// Replace the whole state with a fresh inspiral built from the current
    /// configuration. The rng is reseeded so every reset is reproducible.
    pub fn reset(&mut self) {
        self.rng = ChaChaRng::seed_from_u64(self.parameters.seed);
        self.state = initial_state(self.binary, &self.parameters, &mut self.rng);
        info!(
            mass_ratio = self.binary.mass_ratio,
            separation = self.binary.separation,
            "simulation reset"
        );
    }

    /// One frame: clamp and scale `elapsed`, then run every update of the
    /// current phase. Paused or zero-length frames change nothing.
    pub fn advance(&mut self, elapsed: f64) -> Option<TickReport> {
        let dt = self.engine.frame_dt(elapsed)?;
        let entered = phase_step(&mut self.state, &self.parameters, &self.engine, dt, &mut self.rng);

        if let Some(phase) = entered {
            info!(%phase, progress = self.state.progress, "phase transition");
        }
        debug!(phase = %self.state.phase, progress = self.state.progress, dt, "tick");

        Some(TickReport {
            dt,
            phase: self.state.phase,
            progress: self.state.progress,
            entered,
        })
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.engine.paused = paused;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.engine.paused = !self.engine.paused;
        self.engine.paused
    }

    pub fn set_time_scale(&mut self, time_scale: f64) {
        self.engine.time_scale = positive_or_floor("time_scale", time_scale, MIN_CLOCK_VALUE);
    }

    /// Takes effect on the next reset
    pub fn set_mass_ratio(&mut self, mass_ratio: f64) {
        self.binary.mass_ratio = positive_or_floor("mass_ratio", mass_ratio, MIN_BINARY_VALUE);
    }

    /// Takes effect on the next reset
    pub fn set_separation(&mut self, separation: f64) {
        self.binary.separation = positive_or_floor("separation", separation, MIN_BINARY_VALUE);
    }

    pub fn set_disks_enabled(&mut self, enabled: bool) {
        self.engine.disks_enabled = enabled;
    }

    pub fn set_lensing_enabled(&mut self, enabled: bool) {
        self.engine.lensing_enabled = enabled;
    }

    pub fn set_waves_enabled(&mut self, enabled: bool) {
        self.engine.waves_enabled = enabled;
    }

    /// Lensing sources, empty while the lensing effect is off
    pub fn lensing_targets(&self) -> Vec<LensTarget> {
        if self.engine.lensing_enabled {
            self.state.lensing_targets()
        } else {
            Vec::new()
        }
    }

    /// A disk is drawn when its body is and the disk toggle is on
    pub fn disk_visible(&self, slot: BodySlot) -> bool {
        self.engine.disks_enabled && self.state.body(slot).visible
    }

    pub fn system_info(&self) -> SystemInfo {
        self.state.system_info(self.parameters.G)
    }
}
