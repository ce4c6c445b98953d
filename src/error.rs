use thiserror::Error;

/// Top-level error type for the celldrift engine.
#[derive(Debug, Error)]
pub enum CelldriftError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Partition(#[from] PartitionError),
}

/// Errors related to the topology store.
///
/// Degenerate geometry (zero-length edges, unresolvable shared vertices,
/// empty input) is never an error — those cases degrade to safe defaults so
/// the evolution loop can run indefinitely. Only stale-id lookups surface
/// here.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to building the Voronoi partition.
#[derive(Debug, Error)]
pub enum PartitionError {
    #[error("triangulation insertion failed: {0}")]
    Insertion(#[from] spade::InsertionError),

    #[error("need at least {min} seed points, got {got}")]
    InsufficientSeeds { min: usize, got: usize },

    #[error("degenerate domain: {0}")]
    DegenerateDomain(String),
}

/// Convenience type alias for results using [`CelldriftError`].
pub type Result<T> = std::result::Result<T, CelldriftError>;
