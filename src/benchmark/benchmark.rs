use std::time::Instant;

use log::{info, warn};

use crate::error::Result;
use crate::simulation::engine::{MoleculeSimulation, Simulation};
use crate::simulation::forces::{ForceField, LennardJones};
use crate::simulation::grid::SpatialGrid;
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

/// Molecules per cell kept constant while N grows
const DENSITY: f64 = 1.5;

/// Largest relative deviation between the two force passes still counted as agreement
const AGREEMENT_TOLERANCE: f64 = 1e-9;

/// Parameters for `n` molecules at constant density, square grid
fn make_params(n: usize) -> Parameters {
    let side = ((n as f64 / DENSITY).sqrt().ceil() as usize).max(3);
    Parameters {
        num_molecules: n,
        num_rows: side,
        num_columns: side,
        ..Parameters::default()
    }
}

/// Largest deviation between two force buffers, relative to `1 + |reference|`
fn max_deviation(forces: &[NVec2], reference: &[NVec2]) -> f64 {
    forces
        .iter()
        .zip(reference.iter())
        .map(|(a, b)| (a - b).norm() / (1.0 + b.norm()))
        .fold(0.0, f64::max)
}

/// Time the grid sweep against the direct all-pairs pass on the same
/// positions and warn if their results disagree
pub fn bench_forces() -> Result<()> {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let sim = MoleculeSimulation::new(make_params(n))?;
        let positions = sim.positions().to_vec();
        let params = sim.parameters();

        let forces = ForceField::new(LennardJones::new(
            params.cutoff_radius(),
            params.min_distance(),
        ));
        let mut grid =
            SpatialGrid::new(params.num_rows, params.num_columns, params.cutoff_radius())?;
        let mut out = vec![NVec2::zeros(); n];
        let mut reference = vec![NVec2::zeros(); n];

        // Warm up
        grid.place(&positions);
        forces.compute_forces(&positions, &mut out, &grid);

        // Time grid sweep, including the rebuild
        let t0 = Instant::now();
        grid.clear();
        grid.place(&positions);
        forces.compute_forces(&positions, &mut out, &grid);
        let dt_cells = t0.elapsed().as_secs_f64();

        // Time direct
        let t1 = Instant::now();
        forces.compute_forces_direct(&positions, &mut reference, grid.width(), grid.height());
        let dt_direct = t1.elapsed().as_secs_f64();

        let max_dev = max_deviation(&out, &reference);

        info!(
            "N = {n:5}, cells = {:8.6} s, direct = {:8.6} s, max deviation = {:.2e}",
            dt_cells, dt_direct, max_dev
        );
        if max_dev > AGREEMENT_TOLERANCE {
            warn!("N = {n}: grid sweep and direct pass disagree ({max_dev:.2e})");
        }
    }
    Ok(())
}

/// Time full `do_step` calls for a range of n
/// Prints CSV so the curve can be pasted into a spreadsheet
pub fn bench_step_curve() -> Result<()> {
    println!("N,ms_per_step");

    for n in (200..=6400).step_by(200) {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 1600 { 20 } else { 5 };

        let mut sim = MoleculeSimulation::new(make_params(n))?;

        // Warm-up one step
        sim.do_step();

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.do_step();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_sweep_agrees_with_direct_at_bench_density() {
        let sim = MoleculeSimulation::new(make_params(200)).unwrap();
        let params = sim.parameters();
        let forces = ForceField::new(LennardJones::new(
            params.cutoff_radius(),
            params.min_distance(),
        ));

        let mut reference = vec![NVec2::zeros(); 200];
        forces.compute_forces_direct(sim.positions(), &mut reference, sim.width(), sim.height());

        assert!(max_deviation(sim.accelerations(), &reference) <= AGREEMENT_TOLERANCE);
    }

    #[test]
    fn deviation_reports_the_worst_entry() {
        let reference = vec![NVec2::new(1.0, 0.0), NVec2::zeros()];
        let forces = vec![NVec2::new(1.0, 0.0), NVec2::new(0.0, 3.0)];
        assert_eq!(max_deviation(&forces, &reference), 3.0);
        assert_eq!(max_deviation(&reference, &reference), 0.0);
    }
}
