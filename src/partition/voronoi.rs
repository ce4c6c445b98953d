use std::collections::HashMap;

use rand::Rng;
use spade::{DelaunayTriangulation, Point2 as SpadePoint2, Triangulation};
use tracing::debug;

use crate::error::{PartitionError, Result};
use crate::math::polygon::circumcenter;
use crate::math::Point2;

use super::{Domain, SeedCell};

/// Coordinate key resolution for circumcenter dedup.
const DEDUP_SCALE: f64 = 1e7;

/// Samples `count` seed points uniformly in the domain.
pub fn generate_seeds<R: Rng>(domain: &Domain, count: usize, rng: &mut R) -> Vec<Point2> {
    (0..count)
        .map(|_| {
            Point2::new(
                rng.gen_range(domain.min().x..domain.max().x),
                rng.gen_range(domain.min().y..domain.max().y),
            )
        })
        .collect()
}

/// Builds the Voronoi cells of a seed set over a rectangular domain.
///
/// Ghost copies of every seed are inserted around the real ones — the eight
/// periodic translates when the domain wraps, the four boundary mirror
/// reflections otherwise — so each real seed sits in the interior of the
/// triangulation and its Voronoi cell is finite. Ghosts exist only inside
/// the triangulation; the returned cells belong to real seeds exclusively.
///
/// Each cell is the angle-sorted ring of circumcenters of the Delaunay
/// triangles adjacent to its seed.
pub struct VoronoiPartition {
    domain: Domain,
    periodic: bool,
}

impl VoronoiPartition {
    /// Creates a new `VoronoiPartition` operation.
    #[must_use]
    pub fn new(domain: Domain, periodic: bool) -> Self {
        Self { domain, periodic }
    }

    /// Executes the construction for the given seed points.
    ///
    /// Cells that come out with fewer than three corners (collinear seed
    /// clusters) are dropped, not fatal.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three seeds are supplied or a seed
    /// coordinate is not finite.
    pub fn execute(&self, seeds: &[Point2]) -> Result<Vec<SeedCell>> {
        if seeds.len() < 3 {
            return Err(PartitionError::InsufficientSeeds {
                min: 3,
                got: seeds.len(),
            }
            .into());
        }

        let mut triangulation: DelaunayTriangulation<SpadePoint2<f64>> =
            DelaunayTriangulation::new();

        // Real seeds first; remember which triangulation vertices they are.
        let mut seed_slot: HashMap<usize, usize> = HashMap::new();
        for (slot, seed) in seeds.iter().enumerate() {
            let handle = triangulation
                .insert(SpadePoint2::new(seed.x, seed.y))
                .map_err(PartitionError::from)?;
            seed_slot.insert(handle.index(), slot);
        }

        for ghost in self.ghosts(seeds) {
            triangulation
                .insert(SpadePoint2::new(ghost.x, ghost.y))
                .map_err(PartitionError::from)?;
        }

        // Gather each real seed's adjacent circumcenters by walking all
        // inner triangles once.
        let mut corners: Vec<HashMap<(i64, i64), Point2>> =
            vec![HashMap::new(); seeds.len()];
        for face in triangulation.inner_faces() {
            let vs = face.vertices();
            let ps: Vec<Point2> = vs
                .iter()
                .map(|v| {
                    let pos = v.position();
                    Point2::new(pos.x, pos.y)
                })
                .collect();
            let Some(cc) = circumcenter(&ps[0], &ps[1], &ps[2]) else {
                continue;
            };
            #[allow(clippy::cast_possible_truncation)]
            let key = (
                (cc.x * DEDUP_SCALE).round() as i64,
                (cc.y * DEDUP_SCALE).round() as i64,
            );
            for v in &vs {
                if let Some(&slot) = seed_slot.get(&v.fix().index()) {
                    corners[slot].insert(key, cc);
                }
            }
        }

        let mut cells = Vec::with_capacity(seeds.len());
        let mut dropped = 0_usize;
        for (slot, ring) in corners.into_iter().enumerate() {
            let seed = seeds[slot];
            let mut polygon: Vec<Point2> = ring.into_values().collect();
            if polygon.len() < 3 {
                dropped += 1;
                continue;
            }
            polygon.sort_by(|a, b| {
                let angle_a = (a.y - seed.y).atan2(a.x - seed.x);
                let angle_b = (b.y - seed.y).atan2(b.x - seed.x);
                angle_a
                    .partial_cmp(&angle_b)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            cells.push(SeedCell { seed, polygon });
        }

        debug!(
            seeds = seeds.len(),
            cells = cells.len(),
            dropped,
            periodic = self.periodic,
            "voronoi partition built"
        );
        Ok(cells)
    }

    /// Ghost seed positions surrounding the real ones.
    fn ghosts(&self, seeds: &[Point2]) -> Vec<Point2> {
        let mut out = Vec::new();
        if self.periodic {
            let (w, h) = (self.domain.width(), self.domain.height());
            for ix in -1_i32..=1 {
                for iy in -1_i32..=1 {
                    if ix == 0 && iy == 0 {
                        continue;
                    }
                    let (dx, dy) = (f64::from(ix) * w, f64::from(iy) * h);
                    out.extend(seeds.iter().map(|s| Point2::new(s.x + dx, s.y + dy)));
                }
            }
        } else {
            let (min, max) = (self.domain.min(), self.domain.max());
            for s in seeds {
                out.push(Point2::new(2.0 * min.x - s.x, s.y));
                out.push(Point2::new(2.0 * max.x - s.x, s.y));
                out.push(Point2::new(s.x, 2.0 * min.y - s.y));
                out.push(Point2::new(s.x, 2.0 * max.y - s.y));
            }
        }
        out
    }
}
