use std::collections::HashMap;

use crate::error::Result;
use crate::topology::{EdgeId, MeshStore, VertexId};

/// Populates every edge's `connected_edges` from shared-vertex adjacency.
///
/// All edges incident to a vertex are mutually connected there. An edge pair
/// sharing both endpoints is recorded once. The relation excludes self and
/// is symmetric by construction.
pub(crate) fn connect_edges(store: &mut MeshStore) -> Result<()> {
    let mut incident: HashMap<VertexId, Vec<EdgeId>> = HashMap::new();
    for (id, edge) in store.edges() {
        incident.entry(edge.start).or_default().push(id);
        incident.entry(edge.end).or_default().push(id);
    }

    let mut connections: HashMap<EdgeId, Vec<EdgeId>> = HashMap::new();
    for edges_at_vertex in incident.values() {
        for (i, &a) in edges_at_vertex.iter().enumerate() {
            for &b in &edges_at_vertex[i + 1..] {
                if a == b {
                    continue;
                }
                connections.entry(a).or_default().push(b);
                connections.entry(b).or_default().push(a);
            }
        }
    }

    for (id, mut neighbors) in connections {
        neighbors.sort_unstable();
        neighbors.dedup();
        store.edge_mut(id)?.connected_edges = neighbors;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::topology::{EdgeData, VertexData};

    #[test]
    fn edges_sharing_vertex_are_connected() {
        let mut store = MeshStore::new();
        let a = store.add_vertex(VertexData::new(Point2::new(0.0, 0.0)));
        let b = store.add_vertex(VertexData::new(Point2::new(1.0, 0.0)));
        let c = store.add_vertex(VertexData::new(Point2::new(1.0, 1.0)));
        let d = store.add_vertex(VertexData::new(Point2::new(5.0, 5.0)));
        let e1 = store.add_edge(EdgeData::new(a, b, 1.0));
        let e2 = store.add_edge(EdgeData::new(b, c, 1.0));
        let e3 = store.add_edge(EdgeData::new(c, d, 1.0));

        connect_edges(&mut store).unwrap();

        assert_eq!(store.edge(e1).unwrap().connected_edges, vec![e2]);
        let mid = &store.edge(e2).unwrap().connected_edges;
        assert_eq!(mid.len(), 2);
        assert!(mid.contains(&e1) && mid.contains(&e3));
    }

    #[test]
    fn pair_sharing_both_endpoints_recorded_once() {
        let mut store = MeshStore::new();
        let a = store.add_vertex(VertexData::new(Point2::new(0.0, 0.0)));
        let b = store.add_vertex(VertexData::new(Point2::new(1.0, 0.0)));
        let e1 = store.add_edge(EdgeData::new(a, b, 1.0));
        let e2 = store.add_edge(EdgeData::new(b, a, 1.0));

        connect_edges(&mut store).unwrap();

        assert_eq!(store.edge(e1).unwrap().connected_edges, vec![e2]);
        assert_eq!(store.edge(e2).unwrap().connected_edges, vec![e1]);
    }

    #[test]
    fn isolated_edge_has_no_connections() {
        let mut store = MeshStore::new();
        let a = store.add_vertex(VertexData::new(Point2::new(0.0, 0.0)));
        let b = store.add_vertex(VertexData::new(Point2::new(1.0, 0.0)));
        let e1 = store.add_edge(EdgeData::new(a, b, 1.0));

        connect_edges(&mut store).unwrap();

        assert!(store.edge(e1).unwrap().connected_edges.is_empty());
    }
}
