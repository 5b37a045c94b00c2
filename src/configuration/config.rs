//! Configuration types for loading merger scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – frame clock, headless run length and visual toggles
//! - [`ParametersConfig`] – physical constants, ensemble sizes and seed
//! - [`BinaryConfig`]     – mass ratio and initial separation of the pair
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every field is optional and falls back to its default:
//!
//! ```yaml
//! engine:
//!   max_dt: 0.016           # clamp on the raw frame time
//!   time_scale: 1.0         # multiplies the clamped frame time
//!   frames: 6000            # headless run length
//!   frame_dt: 0.016         # raw elapsed time fed to each headless frame
//!   disks: true
//!   lensing: true
//!   waves: true
//!
//! parameters:
//!   G: 400.0                # artistic gravitational constant
//!   c: 30.0                 # speed of light for the radiation loss
//!   primary_mass: 12.0
//!   radiation_damping: 0.001
//!   mass_loss: 0.05         # fraction of mass radiated at merger
//!   disk_particles: 20000
//!   flare_particles: 5000
//!   seed: 42                # deterministic seed
//!
//! binary:
//!   mass_ratio: 0.8
//!   separation: 50.0
//! ```
//!
//! The scenario builder maps this configuration into its runtime types
//! (`Engine`, `Parameters`, `Binary`).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Failure to load a scenario file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scenario YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Frame clock and controls
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub max_dt: f64, // per-frame clamp before time scaling
    pub time_scale: f64, // simulated seconds per clamped wall-clock second
    pub frames: usize, // frames run by the headless driver
    pub frame_dt: f64, // raw elapsed seconds per headless frame
    pub disks: bool, // update disk particles at all
    pub lensing: bool, // lensing effect toggle
    pub waves: bool, // wave effect toggle
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_dt: 0.016,
            time_scale: 1.0,
            frames: 6_000,
            frame_dt: 0.016,
            disks: true,
            lensing: true,
            waves: true,
        }
    }
}

/// Physical constants and ensemble sizes
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64, // gravitational constant
    pub c: f64, // speed of light
    pub primary_mass: f64, // mass of the first primary
    pub radiation_damping: f64, // damping coefficient of the radiation loss
    pub mass_loss: f64, // fraction of total mass lost at merger
    pub disk_particles: usize, // particles per disk
    pub flare_particles: usize, // particles in the merger flare
    pub seed: u64, // deterministic seed to make runs reproducible
}

impl Default for ParametersConfig {
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

/// The pair that will merge
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BinaryConfig {
    pub mass_ratio: f64, // m2 / m1, roughly (0, 2]
    pub separation: f64, // initial distance between the bodies
}

impl Default for BinaryConfig {
    fn default() -> Self {
        Self {
            mass_ratio: 0.8,
            separation: 50.0,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // frame clock and toggles
    pub parameters: ParametersConfig, // constants and ensemble sizes
    pub binary: BinaryConfig, // initial pair
}

impl ScenarioConfig {
    /// Parse a scenario from a YAML string
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }
}

/// Load a scenario from a YAML file
pub fn load_scenario_config(path: impl AsRef<Path>) -> Result<ScenarioConfig, ConfigError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_yaml::from_reader(reader)?)
}
