//! Molecule simulation runtime
//!
//! Owns the grid, the particle arrays, the force field and the energy
//! target, and runs the full step pipeline behind [`Simulation::do_step`]

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SimulationError};
use crate::simulation::energy::{kinetic_energy, EnergyNormalizer};
use crate::simulation::forces::{ForceField, LennardJones, PairForce};
use crate::simulation::grid::SpatialGrid;
use crate::simulation::initial::InitialState;
use crate::simulation::integrator::{verlet_step, wrap_positions};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, ParticleState};

/// x and y coordinate ranges of a simulated area
pub type Dim = ((f64, f64), (f64, f64));

/// A step-driven simulation on a 2D area, driven once per frame by a
/// presentation layer
pub trait Simulation {
    fn dim(&self) -> Dim;
    fn do_step(&mut self);
}

#[derive(Debug, Clone)]
pub struct MoleculeSimulation {
    parameters: Parameters,
    grid: SpatialGrid,
    forces: ForceField<LennardJones>,
    state: ParticleState,
    normalizer: EnergyNormalizer,
    steps: u64,
}

impl MoleculeSimulation {
    /// Build a simulation with positions and velocities sampled from a
    /// generator seeded with `parameters.seed`.
    pub fn new(parameters: Parameters) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(parameters.seed);
        Self::with_rng(parameters, &mut rng)
    }

    /// Same as [`MoleculeSimulation::new`] with a caller-provided generator.
    pub fn with_rng<R: Rng + ?Sized>(parameters: Parameters, rng: &mut R) -> Result<Self> {
        parameters.validate()?;
        let grid = Self::build_grid(&parameters)?;
        let initial = InitialState::sample(&parameters, grid.width(), grid.height(), rng)?;
        Self::assemble(parameters, grid, initial.positions, initial.velocities)
    }

    /// Build a simulation from explicit positions and velocities instead of
    /// sampling them. Both must hold exactly `parameters.num_molecules`
    /// entries; positions are wrapped into the domain.
    pub fn from_state(
        parameters: Parameters,
        positions: Vec<NVec2>,
        velocities: Vec<NVec2>,
    ) -> Result<Self> {
        parameters.validate()?;
        if positions.len() != parameters.num_molecules {
            return Err(SimulationError::config(format!(
                "expected {} positions, got {}",
                parameters.num_molecules,
                positions.len()
            )));
        }
        let grid = Self::build_grid(&parameters)?;
        Self::assemble(parameters, grid, positions, velocities)
    }

    fn build_grid(parameters: &Parameters) -> Result<SpatialGrid> {
        SpatialGrid::new(parameters.num_rows, parameters.num_columns, parameters.cutoff_radius())
    }

    fn assemble(
        parameters: Parameters,
        grid: SpatialGrid,
        mut positions: Vec<NVec2>,
        velocities: Vec<NVec2>,
    ) -> Result<Self> {
        wrap_positions(&mut positions, grid.width(), grid.height());
        let state = ParticleState::new(positions, velocities)?;
        let normalizer = EnergyNormalizer::new(&state.velocities);
        let forces = ForceField::new(LennardJones::new(
            parameters.cutoff_radius(),
            parameters.min_distance(),
        ));

        let mut sim = Self {
            parameters,
            grid,
            forces,
            state,
            normalizer,
            steps: 0,
        };
        // accelerations at t = 0 for the first position update
        sim.compute_forces();
        Ok(sim)
    }

    /// Rebuild the grid from the current positions and recompute all
    /// accelerations, without moving anything.
    pub fn compute_forces(&mut self) {
        self.grid.clear();
        self.grid.place(&self.state.positions);
        self.forces
            .compute_forces(&self.state.positions, &mut self.state.accelerations, &self.grid);
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    pub fn width(&self) -> f64 {
        self.grid.width()
    }

    pub fn height(&self) -> f64 {
        self.grid.height()
    }

    pub fn cutoff_radius(&self) -> f64 {
        self.forces.potential.cutoff()
    }

    /// Stable molecule ids `0..n`
    pub fn molecules(&self) -> Range<usize> {
        0..self.state.len()
    }

    pub fn positions(&self) -> &[NVec2] {
        &self.state.positions
    }

    pub fn velocities(&self) -> &[NVec2] {
        &self.state.velocities
    }

    pub fn accelerations(&self) -> &[NVec2] {
        &self.state.accelerations
    }

    pub fn kinetic_energy(&self) -> f64 {
        kinetic_energy(&self.state.velocities)
    }

    pub fn target_energy(&self) -> f64 {
        self.normalizer.target_energy()
    }

    /// Simulated time
    pub fn time(&self) -> f64 {
        self.state.t
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl Simulation for MoleculeSimulation {
    fn dim(&self) -> Dim {
        ((0.0, self.grid.width()), (0.0, self.grid.height()))
    }

    fn do_step(&mut self) {
        verlet_step(&mut self.state, &mut self.grid, &self.forces, self.parameters.time_step);
        self.normalizer.normalize(&mut self.state.velocities);
        self.steps += 1;
    }
}
