use crate::error::PartitionError;
use crate::math::{Point2, Vector2, TOLERANCE};

/// The rectangular domain `[min_x, max_x) × [min_y, max_y)` the partition
/// covers.
#[derive(Debug, Clone, Copy)]
pub struct Domain {
    min: Point2,
    max: Point2,
}

impl Domain {
    /// Creates a domain from its corner points.
    ///
    /// # Errors
    ///
    /// Returns an error if either extent is not positive.
    pub fn new(min: Point2, max: Point2) -> Result<Self, PartitionError> {
        if max.x - min.x < TOLERANCE || max.y - min.y < TOLERANCE {
            return Err(PartitionError::DegenerateDomain(format!(
                "extent ({}, {}) is not positive",
                max.x - min.x,
                max.y - min.y
            )));
        }
        Ok(Self { min, max })
    }

    /// Lower-left corner.
    #[must_use]
    pub fn min(&self) -> Point2 {
        self.min
    }

    /// Upper-right corner.
    #[must_use]
    pub fn max(&self) -> Point2 {
        self.max
    }

    /// Domain width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Domain height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Domain extent as a vector.
    #[must_use]
    pub fn extent(&self) -> Vector2 {
        self.max - self.min
    }

    /// Whether `p` lies inside `[min, max)`.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Wraps each coordinate of `p` into `[min, max)` by whole domain
    /// extents. A point already in range comes back unchanged.
    #[must_use]
    pub fn wrap(&self, p: Point2) -> Point2 {
        Point2::new(
            wrap_coord(p.x, self.min.x, self.max.x),
            wrap_coord(p.y, self.min.y, self.max.y),
        )
    }
}

/// `rem_euclid` can round up to exactly the modulus for tiny negative
/// inputs; the half-open contract requires folding that case back to `min`.
fn wrap_coord(x: f64, min: f64, max: f64) -> f64 {
    let wrapped = min + (x - min).rem_euclid(max - min);
    if wrapped >= max {
        min
    } else {
        wrapped
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn domain() -> Domain {
        Domain::new(Point2::new(0.0, 0.0), Point2::new(10.0, 4.0)).unwrap()
    }

    #[test]
    fn degenerate_domain_rejected() {
        assert!(Domain::new(Point2::new(0.0, 0.0), Point2::new(0.0, 1.0)).is_err());
        assert!(Domain::new(Point2::new(0.0, 0.0), Point2::new(1.0, -1.0)).is_err());
    }

    #[test]
    fn wrap_past_max_reenters_at_min() {
        let d = domain();
        let p = d.wrap(Point2::new(10.25, 2.0));
        assert!((p.x - 0.25).abs() < 1e-9);
        assert!((p.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn wrap_below_min_reenters_at_max_side() {
        let d = domain();
        let p = d.wrap(Point2::new(-0.5, -0.5));
        assert!((p.x - 9.5).abs() < 1e-9);
        assert!((p.y - 3.5).abs() < 1e-9);
    }

    #[test]
    fn wrap_in_range_is_identity() {
        let d = domain();
        let p = Point2::new(3.7, 1.2);
        let w = d.wrap(p);
        assert!((w.x - p.x).abs() < 1e-12);
        assert!((w.y - p.y).abs() < 1e-12);
        // Re-wrapping is a no-op too.
        let w2 = d.wrap(w);
        assert!((w2.x - w.x).abs() < 1e-12);
    }

    #[test]
    fn wrap_many_extents_away() {
        let d = domain();
        let p = d.wrap(Point2::new(43.0, -11.0));
        assert!(d.contains(&p));
        assert!((p.x - 3.0).abs() < 1e-9);
        assert!((p.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn nonzero_origin() {
        let d = Domain::new(Point2::new(-5.0, -5.0), Point2::new(5.0, 5.0)).unwrap();
        let p = d.wrap(Point2::new(5.5, 0.0));
        assert!((p.x + 4.5).abs() < 1e-9);
    }
}
