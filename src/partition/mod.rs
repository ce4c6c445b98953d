mod domain;
mod voronoi;

pub use domain::Domain;
pub use voronoi::{generate_seeds, VoronoiPartition};

use crate::math::Point2;

/// One cell of a partition, as handed to the edge-graph builder: a seed
/// point and the ordered vertex loop of the polygon grown around it.
#[derive(Debug, Clone)]
pub struct SeedCell {
    /// The seed the cell was grown from.
    pub seed: Point2,
    /// Ordered boundary loop, at least three points.
    pub polygon: Vec<Point2>,
}
