pub mod cell;
pub mod edge;
pub mod vertex;

pub use cell::{CellData, CellId};
pub use edge::{EdgeData, EdgeId};
pub use vertex::{VertexData, VertexId};

use crate::error::TopologyError;
use crate::math::Point2;
use slotmap::SlotMap;

/// Central arena that owns all mesh entities.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures and enabling safe mutation. In
/// particular, vertex positions are stored exactly once: every edge and
/// cell that touches a vertex sees its deformation through the shared id.
#[derive(Debug, Default)]
pub struct MeshStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    cells: SlotMap<CellId, CellData>,
}

impl MeshStore {
    /// Creates a new, empty mesh store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Iterates over all vertices.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexData)> {
        self.vertices.iter()
    }

    /// Number of vertices in the store.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Edge operations ---

    /// Inserts an edge and returns its ID.
    pub fn add_edge(&mut self, data: EdgeData) -> EdgeId {
        self.edges.insert(data)
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Returns a mutable reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge_mut(&mut self, id: EdgeId) -> Result<&mut EdgeData, TopologyError> {
        self.edges
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Iterates over all edges.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &EdgeData)> {
        self.edges.iter()
    }

    /// Collects all edge ids. Handy when a pass needs to mutate edges
    /// while reading others.
    #[must_use]
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges.keys().collect()
    }

    /// Number of edges in the store.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // --- Cell operations ---

    /// Inserts a cell and returns its ID.
    pub fn add_cell(&mut self, data: CellData) -> CellId {
        self.cells.insert(data)
    }

    /// Returns a reference to the cell data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn cell(&self, id: CellId) -> Result<&CellData, TopologyError> {
        self.cells
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("cell".into()))
    }

    /// Iterates over all cells.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, &CellData)> {
        self.cells.iter()
    }

    /// Number of cells in the store.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Resolves a cell's polygon to its current vertex positions.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell or one of its vertices is not found.
    pub fn cell_polygon(&self, id: CellId) -> Result<Vec<Point2>, TopologyError> {
        let cell = self.cell(id)?;
        cell.polygon
            .iter()
            .map(|&v| self.vertex(v).map(|data| data.point))
            .collect()
    }

    /// Clears all vertices, edges and cells.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.cells.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn vertex_roundtrip() {
        let mut store = MeshStore::new();
        let v = store.add_vertex(VertexData::new(Point2::new(1.0, 2.0)));
        assert!((store.vertex(v).unwrap().point.x - 1.0).abs() < 1e-12);
        store.vertex_mut(v).unwrap().point.y = 5.0;
        assert!((store.vertex(v).unwrap().point.y - 5.0).abs() < 1e-12);
    }

    #[test]
    fn shared_vertex_aliasing() {
        // Two edges holding the same vertex id both observe its motion.
        let mut store = MeshStore::new();
        let a = store.add_vertex(VertexData::new(Point2::new(0.0, 0.0)));
        let b = store.add_vertex(VertexData::new(Point2::new(1.0, 0.0)));
        let c = store.add_vertex(VertexData::new(Point2::new(1.0, 1.0)));
        let e1 = store.add_edge(EdgeData::new(a, b, 1.0));
        let e2 = store.add_edge(EdgeData::new(b, c, 1.0));

        store.vertex_mut(b).unwrap().point = Point2::new(2.0, 0.0);

        let end1 = store.edge(e1).unwrap().end;
        let start2 = store.edge(e2).unwrap().start;
        assert_eq!(end1, start2);
        assert!((store.vertex(end1).unwrap().point.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn stale_id_is_error() {
        let mut store = MeshStore::new();
        let v = store.add_vertex(VertexData::new(Point2::new(0.0, 0.0)));
        store.clear();
        assert!(store.vertex(v).is_err());
    }

    #[test]
    fn cell_polygon_tracks_vertices() {
        let mut store = MeshStore::new();
        let a = store.add_vertex(VertexData::new(Point2::new(0.0, 0.0)));
        let b = store.add_vertex(VertexData::new(Point2::new(1.0, 0.0)));
        let c = store.add_vertex(VertexData::new(Point2::new(0.0, 1.0)));
        let cell = store.add_cell(CellData::new(vec![a, b, c], Point2::new(0.3, 0.3)));

        store.vertex_mut(a).unwrap().point = Point2::new(-1.0, 0.0);
        let poly = store.cell_polygon(cell).unwrap();
        assert!((poly[0].x + 1.0).abs() < 1e-12);
    }
}
