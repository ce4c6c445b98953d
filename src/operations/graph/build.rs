use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;
use crate::math::Point2;
use crate::partition::SeedCell;
use crate::topology::{CellData, EdgeData, EdgeId, MeshStore, VertexData, VertexId};

use super::connect_edges;

/// Builds a deduplicated, connectivity-annotated edge graph from a set of
/// cell polygons.
///
/// Polygon corners are interned into the vertex arena through a quantized
/// coordinate key, so corners that coincide within `epsilon` resolve to the
/// same [`VertexId`] no matter which cell contributed them. Edge identity
/// then falls out of the canonical vertex-id pair: either winding direction
/// of either adjacent cell maps to the same edge, and connectivity is exact
/// shared-id adjacency rather than a per-query tolerance comparison.
pub struct BuildEdgeGraph<'a> {
    cells: &'a [SeedCell],
    epsilon: f64,
}

impl<'a> BuildEdgeGraph<'a> {
    /// Creates a new `BuildEdgeGraph` operation.
    #[must_use]
    pub fn new(cells: &'a [SeedCell], epsilon: f64) -> Self {
        Self { cells, epsilon }
    }

    /// Executes the build, populating the store.
    ///
    /// Degenerate input degrades silently: polygons with fewer than three
    /// distinct corners are skipped, zero-length edge candidates (consecutive
    /// corners in the same quantization bucket) are dropped, and an empty
    /// cell list yields an empty graph.
    ///
    /// # Errors
    ///
    /// Returns an error only if a just-created entity cannot be read back,
    /// which indicates a corrupted store.
    pub fn execute(&self, store: &mut MeshStore) -> Result<()> {
        let mut vertex_index: HashMap<(i64, i64), VertexId> = HashMap::new();
        let mut edge_index: HashMap<(VertexId, VertexId), EdgeId> = HashMap::new();
        let mut skipped = 0_usize;

        for cell in self.cells {
            let loop_ids = self.intern_loop(store, &mut vertex_index, &cell.polygon);
            if loop_ids.len() < 3 {
                skipped += 1;
                continue;
            }
            let cell_id = store.add_cell(CellData::new(loop_ids.clone(), cell.seed));

            for i in 0..loop_ids.len() {
                let a = loop_ids[i];
                let b = loop_ids[(i + 1) % loop_ids.len()];
                if a == b {
                    continue;
                }
                let key = if a < b { (a, b) } else { (b, a) };
                if let Some(&edge_id) = edge_index.get(&key) {
                    let edge = store.edge_mut(edge_id)?;
                    if !edge.cells.contains(&cell_id) {
                        edge.cells.push(cell_id);
                    }
                } else {
                    let pa = store.vertex(a)?.point;
                    let pb = store.vertex(b)?.point;
                    let mut data = EdgeData::new(a, b, (pb - pa).norm());
                    data.cells.push(cell_id);
                    let edge_id = store.add_edge(data);
                    edge_index.insert(key, edge_id);
                }
            }
        }

        connect_edges(store)?;

        debug!(
            cells = store.cell_count(),
            edges = store.edge_count(),
            vertices = store.vertex_count(),
            skipped_polygons = skipped,
            "edge graph built"
        );
        Ok(())
    }

    /// Resolves a polygon loop to vertex ids, collapsing consecutive corners
    /// that land in the same quantization bucket (including the closing pair).
    fn intern_loop(
        &self,
        store: &mut MeshStore,
        index: &mut HashMap<(i64, i64), VertexId>,
        polygon: &[Point2],
    ) -> Vec<VertexId> {
        let mut ids: Vec<VertexId> = Vec::with_capacity(polygon.len());
        for p in polygon {
            let key = self.quantize(p);
            let id = *index
                .entry(key)
                .or_insert_with(|| store.add_vertex(VertexData::new(*p)));
            if ids.last() != Some(&id) {
                ids.push(id);
            }
        }
        while ids.len() > 1 && ids.first() == ids.last() {
            ids.pop();
        }
        ids
    }

    #[allow(clippy::cast_possible_truncation)]
    fn quantize(&self, p: &Point2) -> (i64, i64) {
        (
            (p.x / self.epsilon).round() as i64,
            (p.y / self.epsilon).round() as i64,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn square(x0: f64, y0: f64, size: f64, ccw: bool) -> Vec<Point2> {
        let pts = vec![
            Point2::new(x0, y0),
            Point2::new(x0 + size, y0),
            Point2::new(x0 + size, y0 + size),
            Point2::new(x0, y0 + size),
        ];
        if ccw {
            pts
        } else {
            pts.into_iter().rev().collect()
        }
    }

    fn cell(polygon: Vec<Point2>) -> SeedCell {
        let seed = crate::math::polygon::centroid(&polygon).unwrap();
        SeedCell { seed, polygon }
    }

    #[test]
    fn empty_input_empty_graph() {
        let mut store = MeshStore::new();
        BuildEdgeGraph::new(&[], EPS).execute(&mut store).unwrap();
        assert_eq!(store.edge_count(), 0);
        assert_eq!(store.cell_count(), 0);
    }

    #[test]
    fn single_square_four_edges() {
        let mut store = MeshStore::new();
        let cells = vec![cell(square(0.0, 0.0, 1.0, true))];
        BuildEdgeGraph::new(&cells, EPS).execute(&mut store).unwrap();
        assert_eq!(store.vertex_count(), 4);
        assert_eq!(store.edge_count(), 4);
        for (_, e) in store.edges() {
            assert_eq!(e.cells.len(), 1);
            assert!((e.length - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn shared_edge_deduplicated_across_windings() {
        // Two unit squares side by side; the shared edge must appear once
        // regardless of the second square's winding direction.
        for ccw in [true, false] {
            let mut store = MeshStore::new();
            let cells = vec![
                cell(square(0.0, 0.0, 1.0, true)),
                cell(square(1.0, 0.0, 1.0, ccw)),
            ];
            BuildEdgeGraph::new(&cells, EPS).execute(&mut store).unwrap();
            assert_eq!(store.edge_count(), 7);
            let interior: Vec<_> = store
                .edges()
                .filter(|(_, e)| e.cells.len() == 2)
                .collect();
            assert_eq!(interior.len(), 1);
        }
    }

    #[test]
    fn nearby_corners_merge_within_epsilon() {
        let mut store = MeshStore::new();
        let mut shifted = square(1.0, 0.0, 1.0, true);
        // Perturb the shared corners by less than the quantization step.
        shifted[0].y += 2e-8;
        shifted[3].x -= 2e-8;
        let cells = vec![cell(square(0.0, 0.0, 1.0, true)), cell(shifted)];
        BuildEdgeGraph::new(&cells, EPS).execute(&mut store).unwrap();
        assert_eq!(store.vertex_count(), 6);
        assert_eq!(store.edge_count(), 7);
    }

    #[test]
    fn degenerate_polygon_skipped() {
        let mut store = MeshStore::new();
        let cells = vec![
            cell(vec![
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
            ]),
            cell(square(2.0, 2.0, 1.0, true)),
        ];
        BuildEdgeGraph::new(&cells, EPS).execute(&mut store).unwrap();
        assert_eq!(store.cell_count(), 1);
        assert_eq!(store.edge_count(), 4);
    }

    #[test]
    fn duplicate_closing_vertex_collapsed() {
        let mut poly = square(0.0, 0.0, 1.0, true);
        let first = poly[0];
        poly.push(first);
        let mut store = MeshStore::new();
        BuildEdgeGraph::new(&[cell(poly)], EPS).execute(&mut store).unwrap();
        assert_eq!(store.vertex_count(), 4);
        assert_eq!(store.edge_count(), 4);
    }

    #[test]
    fn connectivity_symmetry() {
        let mut store = MeshStore::new();
        let cells = vec![
            cell(square(0.0, 0.0, 1.0, true)),
            cell(square(1.0, 0.0, 1.0, true)),
        ];
        BuildEdgeGraph::new(&cells, EPS).execute(&mut store).unwrap();
        for (id, e) in store.edges() {
            assert!(!e.connected_edges.contains(&id), "edge lists itself");
            for &c in &e.connected_edges {
                let back = &store.edge(c).unwrap().connected_edges;
                assert!(back.contains(&id), "connectivity not symmetric");
            }
        }
    }
}
