use crate::geometry::{Curve, Line};
use crate::math::intersect_2d::{line_line_intersect_2d, point_at};
use crate::math::Point3;

use super::segment::Segment;

/// Trims adjacent straight segments to meet at a true corner point.
///
/// Each consecutive pair of straight new curves is treated as a pair of
/// infinite lines in the XY plane; their intersection replaces the first
/// segment's end and the second segment's start, with the corner Z
/// averaged from the two original shared ends. Parallel pairs and pairs
/// involving arcs are left untouched (best-effort, no error raised).
pub fn apply_miter(segments: &mut [Segment]) {
    if segments.len() < 2 {
        return;
    }
    for i in 0..segments.len() - 1 {
        let (a, b) = match (
            segments[i].new_curve.as_line(),
            segments[i + 1].new_curve.as_line(),
        ) {
            (Some(a), Some(b)) => (a.clone(), b.clone()),
            _ => continue,
        };
        let Some(corner) = miter_corner(&a, &b) else {
            continue;
        };
        let (Ok(trimmed_a), Ok(trimmed_b)) =
            (Line::new(a.start(), corner), Line::new(corner, b.end()))
        else {
            continue;
        };
        segments[i].new_curve = Curve::Line(trimmed_a);
        segments[i + 1].new_curve = Curve::Line(trimmed_b);
    }
}

/// Infinite-line intersection of two straight segments in the XY plane,
/// with the corner Z averaged from the adjoining original ends.
fn miter_corner(a: &Line, b: &Line) -> Option<Point3> {
    let (t, _) = line_line_intersect_2d(&a.start(), &a.direction(), &b.start(), &b.direction())?;
    let hit = point_at(&a.start(), &a.direction(), t);
    let z = 0.5 * (a.end().z + b.start().z);
    Some(Point3::new(hit.x, hit.y, z))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Arc;
    use crate::math::Vector3;
    use crate::model::{WallId, WallSide};
    use std::f64::consts::PI;

    fn segment(curve: Curve) -> Segment {
        Segment {
            source_wall: WallId::default(),
            source_curve: curve.clone(),
            new_curve: curve,
            source_exterior: Vector3::y(),
            contact_side: WallSide::Exterior,
            placement_dir: Vector3::y(),
            new_exterior: Vector3::y(),
            flip: false,
            offset_along_placement: 0.0,
        }
    }

    fn line(a: (f64, f64, f64), b: (f64, f64, f64)) -> Curve {
        Curve::Line(
            Line::new(Point3::new(a.0, a.1, a.2), Point3::new(b.0, b.1, b.2)).unwrap(),
        )
    }

    #[test]
    fn right_angle_pair_meets_at_corner() {
        // Offset curves of an L: they overshoot/undershoot the corner at
        // (8, 2) until mitered.
        let mut segments = vec![
            segment(line((0.0, 2.0, 0.0), (10.0, 2.0, 0.0))),
            segment(line((8.0, 0.0, 0.0), (8.0, 10.0, 0.0))),
        ];
        apply_miter(&mut segments);

        let end_a = segments[0].new_curve.end_point();
        let start_b = segments[1].new_curve.start_point();
        assert!((end_a.x - 8.0).abs() < 1e-9);
        assert!((end_a.y - 2.0).abs() < 1e-9);
        assert!((end_a - start_b).norm() < 1e-9);
        // Outer endpoints untouched.
        assert!((segments[0].new_curve.start_point().x).abs() < 1e-9);
        assert!((segments[1].new_curve.end_point().y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn corner_z_is_averaged() {
        let mut segments = vec![
            segment(line((0.0, 0.0, 1.0), (10.0, 0.0, 1.0))),
            segment(line((10.0, 0.0, 3.0), (10.0, 10.0, 3.0))),
        ];
        apply_miter(&mut segments);
        assert!((segments[0].new_curve.end_point().z - 2.0).abs() < 1e-9);
    }

    #[test]
    fn parallel_pair_is_skipped() {
        let original_a = line((0.0, 0.0, 0.0), (10.0, 0.0, 0.0));
        let original_b = line((12.0, 5.0, 0.0), (20.0, 5.0, 0.0));
        let mut segments = vec![segment(original_a.clone()), segment(original_b.clone())];
        apply_miter(&mut segments);
        assert_eq!(segments[0].new_curve, original_a);
        assert_eq!(segments[1].new_curve, original_b);
    }

    #[test]
    fn arc_neighbors_are_left_untouched() {
        let arc = Curve::Arc(Arc::new(Point3::new(0.0, 0.0, 0.0), 5.0, 0.0, PI).unwrap());
        let straight = line((0.0, 0.0, 0.0), (10.0, 0.0, 0.0));
        let mut segments = vec![segment(arc.clone()), segment(straight.clone())];
        apply_miter(&mut segments);
        assert_eq!(segments[0].new_curve, arc);
        assert_eq!(segments[1].new_curve, straight);
    }

    #[test]
    fn three_segment_chain_trims_both_corners() {
        // U shape offsets.
        let mut segments = vec![
            segment(line((0.0, 2.0, 0.0), (10.0, 2.0, 0.0))),
            segment(line((8.0, 0.0, 0.0), (8.0, 8.0, 0.0))),
            segment(line((10.0, 6.0, 0.0), (0.0, 6.0, 0.0))),
        ];
        apply_miter(&mut segments);
        let c1 = segments[0].new_curve.end_point();
        let c2 = segments[1].new_curve.end_point();
        assert!((c1.x - 8.0).abs() < 1e-9 && (c1.y - 2.0).abs() < 1e-9);
        assert!((c2.x - 8.0).abs() < 1e-9 && (c2.y - 6.0).abs() < 1e-9);
        assert!((segments[1].new_curve.start_point() - c1).norm() < 1e-9);
        assert!((segments[2].new_curve.start_point() - c2).norm() < 1e-9);
    }
}
