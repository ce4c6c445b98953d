pub mod config;
pub mod error;
pub mod math;
pub mod operations;
pub mod partition;
pub mod simulation;
pub mod topology;

pub use config::SimulationConfig;
pub use error::{CelldriftError, Result};
pub use simulation::{EdgeView, Simulation};
