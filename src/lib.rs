pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{Result, SimulationError};

pub use simulation::states::{NVec2, ParticleState};
pub use simulation::params::Parameters;
pub use simulation::grid::{Neighbor, SpatialGrid};
pub use simulation::forces::{ForceField, LennardJones, PairForce};
pub use simulation::integrator::{advance_positions, half_kick, verlet_step, wrap_positions};
pub use simulation::energy::{kinetic_energy, EnergyNormalizer};
pub use simulation::initial::{CoordinateMapper2D, Distribution, InitialState};
pub use simulation::engine::{Dim, MoleculeSimulation, Simulation};
pub use simulation::scenario::{RunSummary, Scenario};

pub use configuration::config::{RunConfig, ScenarioConfig, SimulationConfig};

pub use benchmark::benchmark::{bench_forces, bench_step_curve};
