use super::{cross_xy, Point3, Vector3, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point3,
    d1: &Vector3,
    p2: &Point3,
    d2: &Vector3,
) -> Option<(f64, f64)> {
    let cross = cross_xy(d1, d2);
    if cross.abs() < TOLERANCE {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point3, dir: &Vector3, t: f64) -> Point3 {
    Point3::new(origin.x + dir.x * t, origin.y + dir.y * t, origin.z)
}
