//! Short-range pair forces evaluated over the cell grid
//!
//! Defines the [`PairForce`] trait, the Lennard-Jones type inverse power law
//! used by the molecule simulation, and [`ForceField`], which sweeps the
//! half-stencil of [`SpatialGrid`] and applies every pair force symmetrically

use crate::simulation::grid::SpatialGrid;
use crate::simulation::states::NVec2;

/// A pairwise short-range force law.
///
/// `r_vec` points from particle `u` to particle `v`. The returned vector is
/// the force acting on `v`; `u` receives its negation.
pub trait PairForce {
    fn pair_force(&self, r_vec: NVec2) -> NVec2;
    fn cutoff(&self) -> f64;
}

/// Inverse power law `24 (2 r^-13 - r^-7)` with a hard cutoff and a
/// minimum-distance floor.
#[derive(Debug, Clone, Copy)]
pub struct LennardJones {
    pub cutoff: f64, // r_c, pairs farther apart contribute nothing
    pub min_distance: f64, // separation floor against the r^-13 blow-up
}

impl LennardJones {
    pub fn new(cutoff: f64, min_distance: f64) -> Self {
        Self {
            cutoff,
            min_distance,
        }
    }

    /// Force factor at separation `r`; positive means repulsive.
    /// The sign flips at `r = 2^(1/6)`.
    pub fn factor(r: f64) -> f64 {
        24.0 * (2.0 * r.powi(-13) - r.powi(-7))
    }
}

impl PairForce for LennardJones {
    fn pair_force(&self, r_vec: NVec2) -> NVec2 {
        let dist = r_vec.norm();
        let r = dist.max(self.min_distance);
        if r > self.cutoff {
            return NVec2::zeros();
        }

        // Below the floor only the factor is clamped, r_vec keeps its length.
        // Coincident particles have no direction and get +x at the floor.
        let r_vec = if dist > 0.0 { r_vec } else { NVec2::new(r, 0.0) };

        Self::factor(r) * r_vec
    }

    fn cutoff(&self) -> f64 {
        self.cutoff
    }
}

/// Cell-list force pass over a [`SpatialGrid`].
#[derive(Debug, Clone)]
pub struct ForceField<P = LennardJones> {
    pub potential: P,
}

impl<P: PairForce> ForceField<P> {
    pub fn new(potential: P) -> Self {
        Self { potential }
    }

    /// Recompute `accelerations` from `positions`.
    ///
    /// The grid must already hold the current positions (`clear` + `place`).
    /// Each unordered pair within reach of the stencil is evaluated once:
    /// the own cell only pairs `u` with the particles stored after it, the
    /// four other stencil cells pair `u` with everything they hold.
    pub fn compute_forces(
        &self,
        positions: &[NVec2],
        accelerations: &mut [NVec2],
        grid: &SpatialGrid,
    ) {
        // Zero buffer
        for a in accelerations.iter_mut() {
            *a = NVec2::zeros();
        }

        for (i, j) in grid.interior_cells() {
            let stencil = grid.stencil(i, j);
            let own = stencil[0].bucket;

            for (k, &u) in own.iter().enumerate() {
                for &v in &own[k + 1..] {
                    self.apply_pair(u, v, positions[v], positions, accelerations);
                }

                for neighbor in &stencil[1..] {
                    let shift = neighbor.displacement.unwrap_or_else(NVec2::zeros);
                    for &v in neighbor.bucket {
                        if u == v {
                            // a particle against its own periodic image
                            // cancels out
                            continue;
                        }
                        self.apply_pair(u, v, positions[v] + shift, positions, accelerations);
                    }
                }
            }
        }
    }

    /// Direct O(N^2) reference pass using the minimum-image convention on a
    /// `width x height` periodic domain.
    ///
    /// Agrees with [`ForceField::compute_forces`] whenever the cutoff is at
    /// most half of each extent; used to check and benchmark the grid sweep.
    pub fn compute_forces_direct(
        &self,
        positions: &[NVec2],
        accelerations: &mut [NVec2],
        width: f64,
        height: f64,
    ) {
        for a in accelerations.iter_mut() {
            *a = NVec2::zeros();
        }

        let n = positions.len();
        for u in 0..n {
            for v in (u + 1)..n {
                let mut r = positions[v] - positions[u];
                r.x -= width * (r.x / width).round();
                r.y -= height * (r.y / height).round();
                self.apply_pair(u, v, positions[u] + r, positions, accelerations);
            }
        }
    }

    /// Evaluate the force between `u` and `v` (seen at `pos_v`) and apply
    /// it to both particles, equal and opposite.
    pub fn apply_pair(
        &self,
        u: usize,
        v: usize,
        pos_v: NVec2,
        positions: &[NVec2],
        accelerations: &mut [NVec2],
    ) {
        let r_vec = pos_v - positions[u];
        let force = self.potential.pair_force(r_vec);
        accelerations[u] -= force;
        accelerations[v] += force;
    }
}
