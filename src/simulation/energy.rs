//! Kinetic energy bookkeeping.
//!
//! The clamped and cut-off forces do not conserve energy exactly, so after
//! every step the velocities are rescaled back to the energy they had at
//! construction.

use super::states::NVec2;

/// Sum of squared speeds, proportional to the kinetic energy (unit masses).
pub fn kinetic_energy(velocities: &[NVec2]) -> f64 {
    velocities.iter().map(|v| v.norm_squared()).sum()
}

#[derive(Debug, Clone, Copy)]
pub struct EnergyNormalizer {
    target_energy: f64,
}

impl EnergyNormalizer {
    /// Capture the energy of `velocities` as the target.
    pub fn new(velocities: &[NVec2]) -> Self {
        Self {
            target_energy: kinetic_energy(velocities),
        }
    }

    pub fn target_energy(&self) -> f64 {
        self.target_energy
    }

    /// Rescale `velocities` to the target energy.
    /// Returns `false` without touching anything when the current energy is
    /// zero, since there is no direction to scale.
    pub fn normalize(&self, velocities: &mut [NVec2]) -> bool {
        let current = kinetic_energy(velocities);
        if current <= 0.0 {
            return false;
        }
        let factor = (self.target_energy / current).sqrt();
        for v in velocities.iter_mut() {
            *v *= factor;
        }
        true
    }
}
