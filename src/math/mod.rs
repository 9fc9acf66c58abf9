pub mod intersect_2d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Projects a vector to the XY plane and normalizes it.
///
/// Returns `None` if the projection is degenerate (near-zero length),
/// so callers can chain explicit fallbacks instead of consuming a zero
/// vector downstream.
#[must_use]
pub fn normalize_xy(v: &Vector3) -> Option<Vector3> {
    let flat = Vector3::new(v.x, v.y, 0.0);
    let len = flat.norm();
    if len < TOLERANCE {
        return None;
    }
    Some(flat / len)
}

/// Z component of the cross product of two vectors in the XY plane.
#[must_use]
pub fn cross_xy(a: &Vector3, b: &Vector3) -> f64 {
    a.x * b.y - a.y * b.x
}
