pub mod states;
pub mod params;
pub mod grid;
pub mod forces;
pub mod integrator;
pub mod energy;
pub mod initial;
pub mod engine;
pub mod scenario;
