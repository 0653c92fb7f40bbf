//! Numerical and physical parameters for the molecule simulation
//!
//! `Parameters` holds the settings fixed at construction:
//! - particle count and grid shape,
//! - particle radius `sigma` and the factors deriving cutoff and clamp,
//! - initial position distribution and velocity range,
//! - time step and random seed

use crate::error::{Result, SimulationError};
use crate::simulation::initial::Distribution;

pub const DEFAULT_CUT_OFF_FACTOR: f64 = 8.0;
pub const DEFAULT_MIN_DISTANCE_FACTOR: f64 = 0.5;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub num_molecules: usize,
    pub num_rows: usize,
    pub num_columns: usize,
    pub sigma: f64, // particle radius
    pub distribution: Distribution, // initial positions
    pub time_step: f64, // h
    pub init_vel_range: (f64, f64), // uniform [low, high)
    pub cut_off_factor: f64, // r_c = cut_off_factor * sigma
    pub min_distance_factor: f64, // pair distance floor = factor * sigma
    pub seed: u64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            num_molecules: 600,
            num_rows: 20,
            num_columns: 20,
            sigma: 1.0,
            distribution: Distribution::Uniform,
            time_step: 0.001,
            init_vel_range: (-300.0, 300.0),
            cut_off_factor: DEFAULT_CUT_OFF_FACTOR,
            min_distance_factor: DEFAULT_MIN_DISTANCE_FACTOR,
            seed: DEFAULT_SEED,
        }
    }
}

impl Parameters {
    /// Cutoff radius, also the edge length of a grid cell.
    pub fn cutoff_radius(&self) -> f64 {
        self.cut_off_factor * self.sigma
    }

    pub fn min_distance(&self) -> f64 {
        self.min_distance_factor * self.sigma
    }

    /// Symmetric velocity range `(-|v|, |v|)`, the way the parameter menu
    /// turns a single speed into a sampling interval.
    pub fn symmetric_range(speed: f64) -> (f64, f64) {
        (speed.min(-speed), speed.max(-speed))
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_molecules == 0 {
            return Err(SimulationError::config("number of molecules must be positive"));
        }
        if self.num_rows == 0 || self.num_columns == 0 {
            return Err(SimulationError::config(format!(
                "grid must have at least one row and column, got {}x{}",
                self.num_rows, self.num_columns
            )));
        }
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(SimulationError::config("sigma must be positive"));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(SimulationError::config("time step must be positive"));
        }
        let (low, high) = self.init_vel_range;
        if !(low.is_finite() && high.is_finite() && low <= high) {
            return Err(SimulationError::config(format!(
                "initial velocity range [{low}, {high}) is inverted or not finite"
            )));
        }
        if !(self.cut_off_factor.is_finite() && self.cut_off_factor > 0.0) {
            return Err(SimulationError::config("cut off factor must be positive"));
        }
        if !(self.min_distance_factor > 0.0 && self.min_distance_factor < self.cut_off_factor) {
            return Err(SimulationError::config(
                "min distance factor must be positive and below the cut off factor",
            ));
        }
        Ok(())
    }
}
