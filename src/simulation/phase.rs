//! Phase state machine: inspiral -> merger -> ringdown
//!
//! One call to [`phase_step`] is one tick. The order inside a tick is fixed:
//! body integration, phase transition check, disk and flare updates, then
//! the outward signals.

use rand::Rng;
use tracing::info;

use super::disk::DiskParticleSystem;
use super::engine::Engine;
use super::integrator::{inspiral_step, InspiralStep};
use super::merger::{apply_remnant, merge, MERGER_BLOOM, MERGER_WAVE_AMPLITUDE, MERGER_WAVE_FREQUENCY};
use super::params::Parameters;
use super::signals::BLOOM_FLOOR;
use super::states::{Body, BodySlot, Phase, SimulationState};

/// Simulated seconds spent in the merger phase
pub const MERGER_DURATION: f64 = 1.5;

/// Progress checkpoint on entering the merger
pub const MERGER_PROGRESS: f64 = 0.9;

/// Progress checkpoint on entering the ringdown
pub const RINGDOWN_PROGRESS: f64 = 0.95;

/// Progress gained per simulated second of ringdown
pub const RINGDOWN_PROGRESS_RATE: f64 = 0.05;

/// Visual scale the remnant starts growing from
pub const REMNANT_START_SCALE: f64 = 0.1;

/// The remnant reaches full size after `1 / REMNANT_GROWTH_RATE` seconds
pub const REMNANT_GROWTH_RATE: f64 = 2.0;

/// Bloom lost per simulated second of ringdown
pub const BLOOM_DECAY_RATE: f64 = 1.5;

/// Fractional wave amplitude lost per simulated second of ringdown
pub const AMPLITUDE_DECAY_RATE: f64 = 1.5;

/// Fractional wave frequency lost per simulated second of ringdown
pub const FREQUENCY_DECAY_RATE: f64 = 1.0;

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Remnant display scale `phase_time` seconds into the merger
pub fn remnant_growth_scale(radius: f64, phase_time: f64) -> f64 {
    lerp(REMNANT_START_SCALE, radius, (phase_time * REMNANT_GROWTH_RATE).min(1.0))
}

/// Advance the whole state by one tick of `dt` simulated seconds.
///
/// Returns the phase entered during this tick, if any.
pub fn phase_step<R: Rng + ?Sized>(
    state: &mut SimulationState,
    params: &Parameters,
    engine: &Engine,
    dt: f64,
    rng: &mut R,
) -> Option<Phase> {
    let entered = match state.phase {
        Phase::Inspiral => inspiral_tick(state, params, engine, dt, rng),
        Phase::Merger => merger_tick(state, params, engine, dt),
        Phase::Ringdown => {
            ringdown_tick(state, params, engine, dt);
            None
        }
    };

    update_signal_origin(state, dt);
    entered
}

fn inspiral_tick<R: Rng + ?Sized>(
    state: &mut SimulationState,
    params: &Parameters,
    engine: &Engine,
    dt: f64,
    rng: &mut R,
) -> Option<Phase> {
    let [b1, b2, _] = &mut state.bodies;

    match inspiral_step(b1, b2, dt, params, state.config.separation) {
        InspiralStep::Merger { separation } => {
            info!(separation, "merger triggered");
            trigger_merger(state, params, rng);
            Some(Phase::Merger)
        }
        InspiralStep::Advanced { progress, amplitude, .. } => {
            state.progress = progress;
            state.signals.wave.amplitude = amplitude;

            if engine.disks_enabled {
                let [d1, d2, _] = &mut state.disks;
                let [b1, b2, _] = &state.bodies;
                d1.update(b1, dt, params.G, Some(b2));
                d2.update(b2, dt, params.G, Some(b1));
            }
            None
        }
    }
}

/// Conservation step plus every side effect of the merger; runs once per reset
pub fn trigger_merger<R: Rng + ?Sized>(state: &mut SimulationState, params: &Parameters, rng: &mut R) {
    let remnant = merge(
        state.body(BodySlot::Primary),
        state.body(BodySlot::Secondary),
        params.mass_loss,
    );

    state.body_mut(BodySlot::Primary).visible = false;
    state.body_mut(BodySlot::Secondary).visible = false;

    let remnant_slot = BodySlot::Remnant.index();
    apply_remnant(&mut state.bodies[remnant_slot], &remnant);
    state.disks[remnant_slot].initialize(&state.bodies[remnant_slot], rng);
    state.remnant_scale = REMNANT_START_SCALE;

    state.flare.trigger(remnant.x, rng);

    state.signals.bloom = MERGER_BLOOM;
    state.signals.wave.amplitude = MERGER_WAVE_AMPLITUDE;
    state.signals.wave.frequency = MERGER_WAVE_FREQUENCY;

    state.phase = Phase::Merger;
    state.phase_time = 0.0;
    state.progress = MERGER_PROGRESS;

    info!(mass = remnant.mass, radius = remnant.radius, "remnant formed");
}

fn merger_tick(state: &mut SimulationState, params: &Parameters, engine: &Engine, dt: f64) -> Option<Phase> {
    state.phase_time += dt;

    let remnant = state.body_mut(BodySlot::Remnant);
    remnant.drift(dt);
    let radius = remnant.radius();
    state.remnant_scale = remnant_growth_scale(radius, state.phase_time);

    let entered = if state.phase_time > MERGER_DURATION {
        state.phase = Phase::Ringdown;
        state.phase_time = 0.0;
        state.progress = RINGDOWN_PROGRESS;
        info!("ringdown");
        Some(Phase::Ringdown)
    } else {
        None
    };

    update_remnant_disk(state, params, engine, dt);
    state.flare.update(dt);
    entered
}

fn ringdown_tick(state: &mut SimulationState, params: &Parameters, engine: &Engine, dt: f64) {
    state.phase_time += dt;

    let remnant = state.body_mut(BodySlot::Remnant);
    remnant.drift(dt);
    let radius = remnant.radius();
    state.remnant_scale = radius;

    let signals = &mut state.signals;
    if signals.bloom > BLOOM_FLOOR {
        signals.bloom = (signals.bloom - BLOOM_DECAY_RATE * dt).max(BLOOM_FLOOR);
    }
    if signals.wave.amplitude > 0.0 {
        signals.wave.amplitude *= (1.0 - AMPLITUDE_DECAY_RATE * dt).max(0.0);
        signals.wave.frequency *= (1.0 - FREQUENCY_DECAY_RATE * dt).max(0.0);
    }

    state.progress = (RINGDOWN_PROGRESS + state.phase_time * RINGDOWN_PROGRESS_RATE).min(1.0);

    update_remnant_disk(state, params, engine, dt);
    state.flare.update(dt);
}

fn update_remnant_disk(state: &mut SimulationState, params: &Parameters, engine: &Engine, dt: f64) {
    if !engine.disks_enabled {
        return;
    }
    let slot = BodySlot::Remnant.index();
    let disk: &mut DiskParticleSystem = &mut state.disks[slot];
    let body: &Body = &state.bodies[slot];
    disk.update(body, dt, params.G, None);
}

fn update_signal_origin(state: &mut SimulationState, dt: f64) {
    state.signals.wave.time += dt;
    state.signals.wave.origin = match state.phase {
        Phase::Inspiral => state.primaries_com(),
        Phase::Merger | Phase::Ringdown => state.body(BodySlot::Remnant).x,
    };
}
