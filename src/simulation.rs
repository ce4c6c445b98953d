use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::math::Point2;
use crate::operations::analysis::{AnalyzeAngles, AngleStats};
use crate::operations::evolution::{EvolveStep, VelocityMap};
use crate::operations::graph::BuildEdgeGraph;
use crate::partition::{generate_seeds, Domain, SeedCell, VoronoiPartition};
use crate::topology::MeshStore;

/// A renderer-facing snapshot of one edge.
#[derive(Debug, Clone, Copy)]
pub struct EdgeView {
    /// Start position.
    pub start: Point2,
    /// End position.
    pub end: Point2,
    /// Acute-neighbor count from the latest analysis pass; the usual
    /// presentation maps it to a color band.
    pub acute_count: u32,
}

/// The generation loop: partition → edge graph → (analyze → evolve)*.
///
/// Pacing is external: callers drive it through [`tick`](Self::tick) (steps
/// only while running) or [`step`](Self::step) directly. The loop itself is
/// deliberately unbounded — there is no convergence or termination check,
/// and the caller decides when to stop. Single-threaded; a generation is
/// one bounded synchronous computation and generations never overlap.
///
/// Lifecycle transitions are exactly three: [`start`](Self::start),
/// [`pause`](Self::pause) (state preserved), and
/// [`regenerate`](Self::regenerate) (all edge, vertex and velocity state
/// discarded and rebuilt from a fresh partition).
pub struct Simulation {
    config: SimulationConfig,
    domain: Domain,
    store: MeshStore,
    velocities: VelocityMap,
    rng: StdRng,
    generation: u64,
    running: bool,
}

impl Simulation {
    /// Creates a simulation over a freshly generated random partition.
    ///
    /// # Errors
    ///
    /// Returns an error if the partition cannot be built.
    pub fn new(config: SimulationConfig, domain: Domain) -> Result<Self> {
        let mut sim = Self::empty(config, domain);
        sim.rebuild()?;
        Ok(sim)
    }

    /// Creates a simulation from an externally supplied partition.
    ///
    /// A later [`regenerate`](Self::regenerate) replaces it with a random
    /// partition per the configured cell count.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge graph cannot be built.
    pub fn from_cells(
        config: SimulationConfig,
        domain: Domain,
        cells: &[SeedCell],
    ) -> Result<Self> {
        let mut sim = Self::empty(config, domain);
        BuildEdgeGraph::new(cells, sim.config.merge_epsilon).execute(&mut sim.store)?;
        Ok(sim)
    }

    fn empty(config: SimulationConfig, domain: Domain) -> Self {
        let rng = config
            .rng_seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            config,
            domain,
            store: MeshStore::new(),
            velocities: VelocityMap::new(),
            rng,
            generation: 0,
            running: false,
        }
    }

    fn rebuild(&mut self) -> Result<()> {
        let seeds = generate_seeds(&self.domain, self.config.cell_count, &mut self.rng);
        let cells = VoronoiPartition::new(self.domain, self.config.periodic).execute(&seeds)?;
        self.store.clear();
        self.velocities.clear();
        self.generation = 0;
        BuildEdgeGraph::new(&cells, self.config.merge_epsilon).execute(&mut self.store)?;
        debug!(
            cells = self.store.cell_count(),
            edges = self.store.edge_count(),
            "simulation rebuilt"
        );
        Ok(())
    }

    /// Begins ticking.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stops ticking; all state is preserved.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Whether ticks currently advance the simulation.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Discards all edge, vertex and velocity state and rebuilds from a
    /// fresh random partition. The running flag is left as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the new partition cannot be built.
    pub fn regenerate(&mut self) -> Result<()> {
        self.rebuild()
    }

    /// Advances one generation if the simulation is running.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is corrupted.
    pub fn tick(&mut self) -> Result<Option<AngleStats>> {
        if self.running {
            self.step().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Advances exactly one generation: analyze, then evolve.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is corrupted.
    pub fn step(&mut self) -> Result<AngleStats> {
        let stats = AnalyzeAngles::new(self.config.change_rate).execute(&mut self.store)?;
        EvolveStep::new(self.config.spring, self.domain, self.config.periodic)
            .execute(&mut self.store, &mut self.velocities)?;
        self.generation += 1;
        debug!(
            generation = self.generation,
            total = stats.total_edges,
            growing = stats.with_acute,
            shrinking = stats.without_acute,
            unconnected = stats.unconnected,
            "generation complete"
        );
        Ok(stats)
    }

    /// Number of completed generations since the last (re)build.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The underlying mesh store.
    #[must_use]
    pub fn store(&self) -> &MeshStore {
        &self.store
    }

    /// Edge snapshots for redraw.
    #[must_use]
    pub fn edge_views(&self) -> Vec<EdgeView> {
        self.store
            .edges()
            .filter_map(|(_, e)| {
                let start = self.store.vertex(e.start).ok()?.point;
                let end = self.store.vertex(e.end).ok()?.point;
                Some(EdgeView {
                    start,
                    end,
                    acute_count: e.acute_count,
                })
            })
            .collect()
    }

    /// Cell polygons resolved to current vertex positions, for redraw.
    #[must_use]
    pub fn cell_polygons(&self) -> Vec<Vec<Point2>> {
        self.store
            .cells()
            .filter_map(|(id, _)| self.store.cell_polygon(id).ok())
            .collect()
    }
}
