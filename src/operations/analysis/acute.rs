use crate::error::Result;
use crate::math::angle::{angle_between_deg, direction};
use crate::topology::{EdgeId, MeshStore};

/// Aggregate counts from one analysis pass, exposed for observability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AngleStats {
    /// Total edges analyzed.
    pub total_edges: usize,
    /// Edges with at least one acute connection (these grow).
    pub with_acute: usize,
    /// Edges with no acute connection (these shrink).
    pub without_acute: usize,
    /// Edges with no connections at all. Nonzero values usually point at a
    /// partition whose cells do not actually touch.
    pub unconnected: usize,
}

/// Assigns every edge its acute-neighbor count and expand/shrink signal.
///
/// For each connected edge the angle is measured at the shared vertex, with
/// both direction vectors pointing away from it. An angle strictly below 90°
/// counts as acute. The signal is `change_rate × acute_count` when the count
/// is positive, and a flat `−change_rate` otherwise — proportional growth
/// but count-independent shrink. That asymmetry is the simulation's rule,
/// not an accident.
///
/// Purely a function of current geometry: the pass rewrites `acute_count`
/// and `expand_value` on every edge and touches nothing else.
pub struct AnalyzeAngles {
    change_rate: f64,
}

impl AnalyzeAngles {
    /// Creates a new `AnalyzeAngles` pass with the given percentage rate.
    #[must_use]
    pub fn new(change_rate: f64) -> Self {
        Self { change_rate }
    }

    /// Executes the pass, writing per-edge results and returning the summary.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge refers to a stale id, which indicates a
    /// corrupted store.
    pub fn execute(&self, store: &mut MeshStore) -> Result<AngleStats> {
        let mut stats = AngleStats::default();
        let ids = store.edge_ids();
        stats.total_edges = ids.len();

        for id in ids {
            let count = self.acute_count(store, id)?;
            let edge = store.edge(id)?;
            if edge.connected_edges.is_empty() {
                stats.unconnected += 1;
            }
            if count > 0 {
                stats.with_acute += 1;
            } else {
                stats.without_acute += 1;
            }
            let expand = if count > 0 {
                self.change_rate * f64::from(count)
            } else {
                -self.change_rate
            };
            let edge = store.edge_mut(id)?;
            edge.acute_count = count;
            edge.expand_value = expand;
        }
        Ok(stats)
    }

    /// Counts the connected edges meeting `id` at an acute angle.
    fn acute_count(&self, store: &MeshStore, id: EdgeId) -> Result<u32> {
        let edge = store.edge(id)?;
        let mut count = 0_u32;
        for &other_id in &edge.connected_edges {
            let other = store.edge(other_id)?;
            // No shared vertex means the pair cannot form a corner; treat as
            // a straight angle, which contributes nothing.
            let Some(shared) = edge.shared_vertex(other) else {
                continue;
            };
            let (Some(far_a), Some(far_b)) = (edge.other_end(shared), other.other_end(shared))
            else {
                continue;
            };
            let v = store.vertex(shared)?.point;
            let d1 = direction(&v, &store.vertex(far_a)?.point);
            let d2 = direction(&v, &store.vertex(far_b)?.point);
            if angle_between_deg(d1, d2) < 90.0 {
                count += 1;
            }
        }
        Ok(count)
    }
}
