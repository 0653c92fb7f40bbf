//! Core state types for the molecule simulation.
//!
//! Particles are stored as parallel arrays (`positions`, `velocities`,
//! `accelerations`) indexed by molecule id `0..n`. The length is fixed when
//! the state is created and never changes afterwards.

use nalgebra::Vector2;

use crate::error::{Result, SimulationError};

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct ParticleState {
    pub positions: Vec<NVec2>, // always inside [0,W) x [0,H) after an update
    pub velocities: Vec<NVec2>,
    pub accelerations: Vec<NVec2>, // rebuilt by every force pass
    pub t: f64, // simulated time
}

impl ParticleState {
    /// Build a state at `t = 0` with zero accelerations.
    /// `positions` and `velocities` must have the same length
    pub fn new(positions: Vec<NVec2>, velocities: Vec<NVec2>) -> Result<Self> {
        if positions.len() != velocities.len() {
            return Err(SimulationError::config(format!(
                "got {} positions but {} velocities",
                positions.len(),
                velocities.len()
            )));
        }
        let accelerations = vec![NVec2::zeros(); positions.len()];
        Ok(Self {
            positions,
            velocities,
            accelerations,
            t: 0.0,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
