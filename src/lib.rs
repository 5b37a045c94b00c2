pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, BodySlot, Binary, Phase, SimulationState, NVec3, radius_for_mass};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::forces::{ParticleAcceleration, ParticleAccelSet, CentralPull, TidalPull};
pub use simulation::integrator::{inspiral_step, InspiralStep};
pub use simulation::merger::{merge, Remnant};
pub use simulation::disk::DiskParticleSystem;
pub use simulation::flare::FlareParticleSystem;
pub use simulation::signals::{Signals, WaveSignal, LensTarget, SystemInfo};
pub use simulation::phase::phase_step;
pub use simulation::scenario::{Scenario, TickReport};

pub use configuration::config::{ScenarioConfig, EngineConfig, ParametersConfig, BinaryConfig, ConfigError, load_scenario_config};

pub use benchmark::benchmark::{bench_disk_update, bench_tick};
