//! Attesta Simulation — single-pass driver for the issue → present → verify
//! credential exchange.

pub mod error;
pub mod scenario;
pub mod simulation;

pub use error::SimError;
pub use scenario::Scenario;
pub use simulation::{run, run_with_sources, SimulationReport};
