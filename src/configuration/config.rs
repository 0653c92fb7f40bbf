//! Configuration types for loading molecule scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`SimulationConfig`] – particle count, grid, radius, distribution, step
//! - [`RunConfig`]        – how long the headless runner steps and reports
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every field is optional and falls back to the defaults shown here:
//!
//! ```yaml
//! simulation:
//!   num_molecules: 600
//!   num_rows: 20
//!   num_columns: 20
//!   sigma: 1.0                  # particle radius
//!   distribution: "uniform"     # uniform, cauchy_center, exponential_zero,
//!                               # gumbel, normal_zero, normal_center
//!   time_step: 0.001
//!   init_vel_range: [-300.0, 300.0]
//!   cut_off_factor: 8.0         # cutoff radius = factor * sigma
//!   min_distance_factor: 0.5    # pair distance floor = factor * sigma
//!   seed: 42
//!
//! run:
//!   steps: 1000
//!   report_interval: 100
//! ```
//!
//! The distribution is kept as a string here and parsed when the scenario is
//! built, so an unknown name surfaces as a configuration error.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::simulation::params::{DEFAULT_CUT_OFF_FACTOR, DEFAULT_MIN_DISTANCE_FACTOR, DEFAULT_SEED};

/// Physical and numerical settings of the molecule simulation
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub num_molecules: usize,
    pub num_rows: usize,
    pub num_columns: usize,
    pub sigma: f64,
    pub distribution: String,
    pub time_step: f64,
    pub init_vel_range: [f64; 2],
    pub cut_off_factor: f64,
    pub min_distance_factor: f64,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_molecules: 600,
            num_rows: 20,
            num_columns: 20,
            sigma: 1.0,
            distribution: "uniform".to_string(),
            time_step: 0.001,
            init_vel_range: [-300.0, 300.0],
            cut_off_factor: DEFAULT_CUT_OFF_FACTOR,
            min_distance_factor: DEFAULT_MIN_DISTANCE_FACTOR,
            seed: DEFAULT_SEED,
        }
    }
}

/// Settings of the headless runner
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub steps: u64, // number of do_step calls
    pub report_interval: u64, // log a summary every n steps, 0 = never
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: 1000,
            report_interval: 100,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub simulation: SimulationConfig,
    pub run: RunConfig,
}

impl ScenarioConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
