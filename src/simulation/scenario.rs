//! Build fully-initialized molecule scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - run settings (`RunConfig`)
//! - a constructed `MoleculeSimulation` at t = 0
//!
//! The headless runner in `main.rs` and the benchmark consume it

use log::{debug, info};

use crate::configuration::config::{RunConfig, ScenarioConfig};
use crate::error::Result;
use crate::simulation::engine::{MoleculeSimulation, Simulation};
use crate::simulation::params::Parameters;

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub steps: u64,
    pub time: f64,
    pub kinetic_energy: f64,
}

pub struct Scenario {
    pub parameters: Parameters,
    pub run: RunConfig,
    pub simulation: MoleculeSimulation,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let parameters = parameters_from_config(&cfg)?;
        let simulation = MoleculeSimulation::new(parameters.clone())?;

        info!(
            "built scenario: {} molecules on a {}x{} grid, domain {:.1}x{:.1}, r_c = {}",
            parameters.num_molecules,
            parameters.num_rows,
            parameters.num_columns,
            simulation.width(),
            simulation.height(),
            simulation.cutoff_radius(),
        );
        debug!("parameters: {:?}", parameters);

        Ok(Self {
            parameters,
            run: cfg.run,
            simulation,
        })
    }

    /// Step the simulation `run.steps` times, logging a summary every
    /// `run.report_interval` steps.
    pub fn run(&mut self) -> RunSummary {
        let interval = self.run.report_interval;
        for _ in 0..self.run.steps {
            self.simulation.do_step();
            let step = self.simulation.steps();
            if interval > 0 && step % interval == 0 {
                info!(
                    "step {:6}: t = {:.4}, kinetic energy = {:.6e}",
                    step,
                    self.simulation.time(),
                    self.simulation.kinetic_energy(),
                );
            }
        }
        RunSummary {
            steps: self.simulation.steps(),
            time: self.simulation.time(),
            kinetic_energy: self.simulation.kinetic_energy(),
        }
    }
}

/// Map the YAML-facing config onto runtime parameters, parsing the
/// distribution name.
pub fn parameters_from_config(cfg: &ScenarioConfig) -> Result<Parameters> {
    let s = &cfg.simulation;
    let parameters = Parameters {
        num_molecules: s.num_molecules,
        num_rows: s.num_rows,
        num_columns: s.num_columns,
        sigma: s.sigma,
        distribution: s.distribution.parse()?,
        time_step: s.time_step,
        init_vel_range: (s.init_vel_range[0], s.init_vel_range[1]),
        cut_off_factor: s.cut_off_factor,
        min_distance_factor: s.min_distance_factor,
        seed: s.seed,
    };
    parameters.validate()?;
    Ok(parameters)
}
