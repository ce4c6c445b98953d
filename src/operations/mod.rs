pub mod analysis;
pub mod evolution;
pub mod graph;
