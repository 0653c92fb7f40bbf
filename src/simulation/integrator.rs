//! Fixed-step velocity-Verlet integration on the periodic domain
//!
//! The step is split into its pieces so the molecule simulation can run
//! them in order around the grid rebuild and force pass:
//! position advance, half kick, force pass, half kick

use super::forces::{ForceField, PairForce};
use super::grid::SpatialGrid;
use super::states::{NVec2, ParticleState};

/// x_n+1 = x_n + h v_n + (h^2 / 2) a_n, then wrap into the domain
pub fn advance_positions(state: &mut ParticleState, h: f64, width: f64, height: f64) {
    let half_h2 = 0.5 * h * h;
    for ((x, v), a) in state
        .positions
        .iter_mut()
        .zip(state.velocities.iter())
        .zip(state.accelerations.iter())
    {
        *x += h * *v + half_h2 * *a;
    }
    wrap_positions(&mut state.positions, width, height);
}

/// v += (h / 2) a
pub fn half_kick(state: &mut ParticleState, h: f64) {
    let half_h = 0.5 * h;
    for (v, a) in state.velocities.iter_mut().zip(state.accelerations.iter()) {
        *v += half_h * *a;
    }
}

/// Move every coordinate outside `[0, extent)` back in, modulo the extent.
pub fn wrap_positions(positions: &mut [NVec2], width: f64, height: f64) {
    for pos in positions.iter_mut() {
        pos.x = wrap_coordinate(pos.x, width);
        pos.y = wrap_coordinate(pos.y, height);
    }
}

fn wrap_coordinate(coord: f64, extent: f64) -> f64 {
    if (0.0..extent).contains(&coord) {
        return coord;
    }
    let wrapped = coord.rem_euclid(extent);
    // tiny negative inputs round up to exactly `extent`
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// Advance the state by one velocity-Verlet step of size `h`.
///
/// Positions move with the accelerations of the previous step, velocities
/// get half a kick from those, the grid is rebuilt and forces recomputed at
/// the new positions, and the second half kick uses the new accelerations.
pub fn verlet_step<P: PairForce>(
    state: &mut ParticleState,
    grid: &mut SpatialGrid,
    forces: &ForceField<P>,
    h: f64,
) {
    if state.is_empty() {
        return;
    }

    advance_positions(state, h, grid.width(), grid.height());
    half_kick(state, h);

    grid.clear();
    grid.place(&state.positions);
    forces.compute_forces(&state.positions, &mut state.accelerations, grid);

    half_kick(state, h);
    state.t += h;
}
