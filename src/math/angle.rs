use super::{Point2, Vector2, TOLERANCE};

/// Computes the angle in degrees between two direction vectors.
///
/// Uses `acos` of the clamped normalized dot product, so accumulated
/// floating-point error in the inputs cannot produce a NaN. A zero-length
/// direction yields 0° — non-informative rather than fatal, since it only
/// arises from degenerate edges that contribute no acute connections anyway.
#[must_use]
pub fn angle_between_deg(d1: Vector2, d2: Vector2) -> f64 {
    let n1 = d1.norm();
    let n2 = d2.norm();
    if n1 < TOLERANCE || n2 < TOLERANCE {
        return 0.0;
    }
    let cos = (d1.dot(&d2) / (n1 * n2)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Direction from `from` toward `to`, not normalized.
#[must_use]
pub fn direction(from: &Point2, to: &Point2) -> Vector2 {
    to - from
}
