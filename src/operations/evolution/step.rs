use slotmap::SecondaryMap;

use crate::error::Result;
use crate::math::{Vector2, TOLERANCE};
use crate::partition::Domain;
use crate::topology::{MeshStore, VertexId};

/// Persistent per-vertex velocity store.
///
/// Keyed by the vertex's arena id, so a vertex keeps its momentum no matter
/// how far it drifts between generations. Keying by quantized position
/// instead would silently drop the velocity whenever a vertex crossed a
/// bucket boundary mid-simulation.
pub type VelocityMap = SecondaryMap<VertexId, Vector2>;

/// Spring-damper integration parameters.
#[derive(Debug, Clone, Copy)]
pub struct SpringParams {
    /// Spring constant.
    pub stiffness: f64,
    /// Velocity damping factor; must stay below 1 for stability.
    pub damping: f64,
    /// Integration timestep. Fixed — stability is the caller's job via
    /// parameter choice.
    pub dt: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 0.3,
            damping: 0.85,
            dt: 0.1,
        }
    }
}

/// Advances every vertex one generation under the spring-damper model.
///
/// The pass runs in five strictly ordered phases:
///
/// 1. Re-baseline every edge (`original_length = length`) and derive its
///    rest length from the expand signal:
///    `target_length = original_length × (1 + expand_value / 100)`.
/// 2. Accumulate spring forces per vertex. Each edge applies a restoring
///    force of magnitude `stiffness × (length − target_length)` along its
///    axis, equal and opposite at its two endpoints; zero-length edges
///    contribute nothing.
/// 3. Integrate per vertex: `v = (v + f·dt) × damping`, then `p += v·dt`.
///    Damping the updated velocity before the move is what keeps the scheme
///    near critically damped; swapping the order changes the stability
///    margin.
/// 4. Wrap positions into the domain when periodic boundaries are on,
///    preserving velocity.
/// 5. Refresh every edge's cached length from the moved endpoints.
pub struct EvolveStep {
    params: SpringParams,
    domain: Domain,
    periodic: bool,
}

impl EvolveStep {
    /// Creates a new `EvolveStep` operation.
    #[must_use]
    pub fn new(params: SpringParams, domain: Domain, periodic: bool) -> Self {
        Self {
            params,
            domain,
            periodic,
        }
    }

    /// Executes one generation of evolution.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge refers to a stale id, which indicates a
    /// corrupted store.
    pub fn execute(&self, store: &mut MeshStore, velocities: &mut VelocityMap) -> Result<()> {
        let edge_ids = store.edge_ids();

        // Phase 1: fresh baseline and target this generation.
        for &id in &edge_ids {
            let edge = store.edge_mut(id)?;
            edge.original_length = edge.length;
            edge.target_length = edge.original_length * (1.0 + edge.expand_value / 100.0);
        }

        // Phase 2: per-vertex force accumulation, equal and opposite.
        let mut forces: SecondaryMap<VertexId, Vector2> = SecondaryMap::new();
        for &id in &edge_ids {
            let edge = store.edge(id)?;
            let (start, end, target) = (edge.start, edge.end, edge.target_length);
            let pa = store.vertex(start)?.point;
            let pb = store.vertex(end)?.point;
            let axis = pb - pa;
            let len = axis.norm();
            if len < TOLERANCE {
                continue;
            }
            let f = (axis / len) * (self.params.stiffness * (len - target));
            add_force(&mut forces, end, -f);
            add_force(&mut forces, start, f);
        }

        // Phases 3 and 4: integrate, then wrap.
        let vertex_ids: Vec<VertexId> = store.vertices().map(|(id, _)| id).collect();
        for id in vertex_ids {
            let force = forces.get(id).copied().unwrap_or_else(Vector2::zeros);
            let prev = velocities.get(id).copied().unwrap_or_else(Vector2::zeros);
            let vel = (prev + force * self.params.dt) * self.params.damping;
            velocities.insert(id, vel);

            let vertex = store.vertex_mut(id)?;
            vertex.point += vel * self.params.dt;
            if self.periodic {
                vertex.point = self.domain.wrap(vertex.point);
            }
        }

        // Phase 5: lengths must never go stale past a vertex mutation.
        for &id in &edge_ids {
            let edge = store.edge(id)?;
            let (start, end) = (edge.start, edge.end);
            let pa = store.vertex(start)?.point;
            let pb = store.vertex(end)?.point;
            store.edge_mut(id)?.length = (pb - pa).norm();
        }
        Ok(())
    }
}

fn add_force(forces: &mut SecondaryMap<VertexId, Vector2>, id: VertexId, f: Vector2) {
    if let Some(existing) = forces.get_mut(id) {
        *existing += f;
    } else {
        forces.insert(id, f);
    }
}
