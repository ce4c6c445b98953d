use super::cell::CellId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the mesh store.
    pub struct EdgeId;
}

/// Data associated with a mesh edge.
///
/// An edge connects two vertices and carries the analysis and evolution
/// state for one generation: its acute-neighbor count, the resulting
/// expand/shrink signal, and the rest length its spring pulls toward.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
    /// Live Euclidean length; refreshed after every integration pass.
    pub length: f64,
    /// Length at the start of the current generation's evolution pass.
    pub original_length: f64,
    /// Rest length the spring pulls toward this generation.
    pub target_length: f64,
    /// Edges sharing a vertex with this one. Excludes self; symmetric.
    pub connected_edges: Vec<EdgeId>,
    /// Number of connected edges meeting this one at an angle < 90°.
    pub acute_count: u32,
    /// Percentage growth (positive) or shrink (negative) signal.
    pub expand_value: f64,
    /// Cells bounded by this edge: two for interior edges, one on the
    /// partition boundary.
    pub cells: Vec<CellId>,
}

impl EdgeData {
    /// Creates an edge between two vertices with the given initial length.
    #[must_use]
    pub fn new(start: VertexId, end: VertexId, length: f64) -> Self {
        Self {
            start,
            end,
            length,
            original_length: length,
            target_length: length,
            connected_edges: Vec::new(),
            acute_count: 0,
            expand_value: 0.0,
            cells: Vec::new(),
        }
    }

    /// Returns the endpoint opposite to `v`, or `None` if `v` is not an
    /// endpoint of this edge.
    #[must_use]
    pub fn other_end(&self, v: VertexId) -> Option<VertexId> {
        if v == self.start {
            Some(self.end)
        } else if v == self.end {
            Some(self.start)
        } else {
            None
        }
    }

    /// Returns the vertex shared with `other`, if any.
    ///
    /// When the two edges share both endpoints (a degenerate two-gon pair),
    /// the start vertex wins; the angle is evaluated at a single vertex
    /// either way.
    #[must_use]
    pub fn shared_vertex(&self, other: &EdgeData) -> Option<VertexId> {
        if self.start == other.start || self.start == other.end {
            Some(self.start)
        } else if self.end == other.start || self.end == other.end {
            Some(self.end)
        } else {
            None
        }
    }
}
