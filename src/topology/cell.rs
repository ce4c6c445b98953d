use crate::math::Point2;

use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a cell in the mesh store.
    pub struct CellId;
}

/// Data associated with a partition cell.
#[derive(Debug, Clone)]
pub struct CellData {
    /// Ordered vertex loop bounding the cell. The ids alias the same
    /// vertices the bounding edges reference, so the polygon tracks edge
    /// deformation without any synchronization step.
    pub polygon: Vec<VertexId>,
    /// The seed point the cell was grown from.
    pub seed: Point2,
}

impl CellData {
    /// Creates a new cell from its vertex loop and seed point.
    #[must_use]
    pub fn new(polygon: Vec<VertexId>, seed: Point2) -> Self {
        Self { polygon, seed }
    }
}
