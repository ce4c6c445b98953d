use crate::operations::evolution::SpringParams;

/// Tunable parameters for a simulation run.
///
/// The engine applies these as given; range validation and clamping are the
/// caller's responsibility (expected ranges: 10–200 cells, change rate
/// 1–20 percent).
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Number of seed points the partition is grown from.
    pub cell_count: usize,
    /// Percentage growth per acute connection (and flat shrink without one).
    pub change_rate: f64,
    /// Spring-damper integration parameters.
    pub spring: SpringParams,
    /// Whether the domain wraps around at its boundaries.
    pub periodic: bool,
    /// Quantization step for merging coincident polygon corners into a
    /// single vertex.
    pub merge_epsilon: f64,
    /// Fixed RNG seed for reproducible partitions; `None` seeds from
    /// entropy.
    pub rng_seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cell_count: 60,
            change_rate: 5.0,
            spring: SpringParams::default(),
            periodic: true,
            merge_epsilon: 1e-6,
            rng_seed: None,
        }
    }
}
