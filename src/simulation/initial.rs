//! Initial positions and velocities.
//!
//! Positions are drawn per axis from one of the [`Distribution`]s and
//! rescaled into the domain with a [`CoordinateMapper2D`]; velocities are
//! uniform on the configured range. All randomness comes from the generator
//! passed in by the caller.

use std::fmt;
use std::str::FromStr;

use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::{Cauchy, Distribution as _, Exp, Gumbel, Normal};

use crate::error::{Result, SimulationError};
use crate::simulation::integrator::wrap_positions;
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

/// Sampling distribution for initial positions.
///
/// `*_center` variants are symmetric around zero and get shifted to the
/// middle of the domain after rescaling; the others keep zero at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// uniform on `[0, 1)`
    Uniform,
    /// standard Cauchy, centered
    CauchyCenter,
    /// exponential with rate 1
    ExponentialZero,
    /// Gumbel with location 0 and scale 1
    Gumbel,
    /// standard normal
    NormalZero,
    /// standard normal, centered
    NormalCenter,
}

impl Distribution {
    pub const ALL: [Distribution; 6] = [
        Distribution::Uniform,
        Distribution::CauchyCenter,
        Distribution::ExponentialZero,
        Distribution::Gumbel,
        Distribution::NormalZero,
        Distribution::NormalCenter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Uniform => "uniform",
            Distribution::CauchyCenter => "cauchy_center",
            Distribution::ExponentialZero => "exponential_zero",
            Distribution::Gumbel => "gumbel",
            Distribution::NormalZero => "normal_zero",
            Distribution::NormalCenter => "normal_center",
        }
    }

    pub fn is_centered(&self) -> bool {
        matches!(self, Distribution::CauchyCenter | Distribution::NormalCenter)
    }

    /// Draw `n` independent samples.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<f64>> {
        let bad = |e: &dyn fmt::Display| SimulationError::config(format!("{}: {e}", self.name()));
        let samples: Vec<f64> = match self {
            Distribution::Uniform => (0..n).map(|_| rng.gen::<f64>()).collect(),
            Distribution::CauchyCenter => {
                let d = Cauchy::new(0.0, 1.0).map_err(|e| bad(&e))?;
                d.sample_iter(&mut *rng).take(n).collect()
            }
            Distribution::ExponentialZero => {
                let d = Exp::new(1.0).map_err(|e| bad(&e))?;
                d.sample_iter(&mut *rng).take(n).collect()
            }
            Distribution::Gumbel => {
                let d = Gumbel::new(0.0, 1.0).map_err(|e| bad(&e))?;
                d.sample_iter(&mut *rng).take(n).collect()
            }
            Distribution::NormalZero | Distribution::NormalCenter => {
                let d = Normal::new(0.0, 1.0).map_err(|e| bad(&e))?;
                d.sample_iter(&mut *rng).take(n).collect()
            }
        };
        Ok(samples)
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distribution {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self> {
        Distribution::ALL
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| SimulationError::UnknownDistribution(s.to_string()))
    }
}

/// Linear scaling between two axis-aligned 2D ranges.
///
/// Only the extents matter: a point is multiplied per axis by
/// `dst_range / src_range`, so zero stays at zero. A degenerate source range
/// scales that axis to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper2D {
    src_dim: ((f64, f64), (f64, f64)),
    dst_dim: ((f64, f64), (f64, f64)),
    scale: NVec2,
}

impl CoordinateMapper2D {
    pub fn new(
        src_dim_x: (f64, f64),
        src_dim_y: (f64, f64),
        dst_dim_x: (f64, f64),
        dst_dim_y: (f64, f64),
    ) -> Self {
        let src_dim = (src_dim_x, src_dim_y);
        let dst_dim = (dst_dim_x, dst_dim_y);
        Self {
            src_dim,
            dst_dim,
            scale: Self::scale_factors(src_dim, dst_dim),
        }
    }

    pub fn src_dim(&self) -> ((f64, f64), (f64, f64)) {
        self.src_dim
    }

    pub fn dst_dim(&self) -> ((f64, f64), (f64, f64)) {
        self.dst_dim
    }

    pub fn set_dst_dim(&mut self, dst_dim: ((f64, f64), (f64, f64))) {
        self.dst_dim = dst_dim;
        self.scale = Self::scale_factors(self.src_dim, dst_dim);
    }

    pub fn map_coordinates(&self, pos: NVec2) -> NVec2 {
        pos.component_mul(&self.scale)
    }

    /// Scale a length along x, e.g. a particle radius for drawing.
    pub fn scale_size_x(&self, size: f64) -> f64 {
        size * self.scale.x
    }

    fn scale_factors(src: ((f64, f64), (f64, f64)), dst: ((f64, f64), (f64, f64))) -> NVec2 {
        let factor = |s: (f64, f64), d: (f64, f64)| -> f64 {
            let src_range = (s.1 - s.0).abs();
            if src_range > 0.0 {
                (d.1 - d.0).abs() / src_range
            } else {
                0.0
            }
        };
        NVec2::new(factor(src.0, dst.0), factor(src.1, dst.1))
    }
}

/// Sampled starting configuration.
#[derive(Debug, Clone)]
pub struct InitialState {
    pub positions: Vec<NVec2>,
    pub velocities: Vec<NVec2>,
}

impl InitialState {
    /// Sample positions and velocities for `params.num_molecules` particles
    /// inside a `width x height` domain.
    ///
    /// The position samples are mapped with their own min/max as source
    /// range, shifted to the domain center for centered distributions and
    /// finally wrapped into `[0,W) x [0,H)`.
    pub fn sample<R: Rng + ?Sized>(
        params: &Parameters,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let n = params.num_molecules;
        let distribution = params.distribution;

        let xs = distribution.sample(rng, n)?;
        let ys = distribution.sample(rng, n)?;

        let mapper =
            CoordinateMapper2D::new(min_max(&xs), min_max(&ys), (0.0, width), (0.0, height));
        let center = NVec2::new(width / 2.0, height / 2.0);

        let mut positions: Vec<NVec2> = xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| {
                let p = mapper.map_coordinates(NVec2::new(x, y));
                if distribution.is_centered() {
                    p + center
                } else {
                    p
                }
            })
            .collect();
        wrap_positions(&mut positions, width, height);

        let (low, high) = params.init_vel_range;
        if !(low <= high) {
            return Err(SimulationError::config(format!(
                "initial velocity range [{low}, {high}) is inverted"
            )));
        }
        let velocities = if low == high {
            // zero-width range, e.g. a system started at rest
            vec![NVec2::new(low, low); n]
        } else {
            let uniform = Uniform::new(low, high);
            let vx: Vec<f64> = (0..n).map(|_| rng.sample(&uniform)).collect();
            let vy: Vec<f64> = (0..n).map(|_| rng.sample(&uniform)).collect();
            vx.into_iter().zip(vy).map(|(x, y)| NVec2::new(x, y)).collect()
        };

        Ok(Self {
            positions,
            velocities,
        })
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}
