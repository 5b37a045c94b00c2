pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod merger;
pub mod disk;
pub mod flare;
pub mod signals;
pub mod phase;
pub mod scenario;
