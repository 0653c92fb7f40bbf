//! Error type shared by the simulation core and the scenario layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    /// Rejected parameters (non-positive sizes, empty ranges, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Distribution name that does not match any supported sampler
    #[error("Configuration error: unknown distribution '{0}'")]
    UnknownDistribution(String),

    /// Cell coordinates outside the addressable range of the grid
    #[error("Invalid cell index i={i}, j={j} for a {rows}x{columns} grid")]
    InvalidCell {
        i: usize,
        j: usize,
        rows: usize,
        columns: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SimulationError {
    pub fn config(message: impl Into<String>) -> Self {
        SimulationError::Config(message.into())
    }

    /// True for every error raised while validating construction input.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            SimulationError::Config(_) | SimulationError::UnknownDistribution(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
