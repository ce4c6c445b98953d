mod step;

pub use step::{EvolveStep, SpringParams, VelocityMap};
