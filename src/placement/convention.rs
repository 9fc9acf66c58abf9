use crate::geometry::Curve;
use crate::math::{normalize_xy, Vector3};
use crate::model::WallData;

/// Which cross product maps a curve tangent to the unflipped exterior.
///
/// Both `Z x v` and `v x Z` are algebraically valid readings of the
/// host's orientation convention; only one agrees with the walls actually
/// in the model. The calibrated token is threaded explicitly through flip
/// resolution — never stored as ambient state — so synthetic walls can
/// exercise either convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TangentConvention {
    /// Unflipped exterior is `Z x tangent` (left of travel).
    #[default]
    ZCrossTangent,
    /// Unflipped exterior is `tangent x Z` (right of travel).
    TangentCrossZ,
}

impl TangentConvention {
    /// Applies the convention to a curve tangent.
    ///
    /// Returns `None` when the tangent has no XY footprint.
    #[must_use]
    pub fn exterior_from_tangent(self, tangent: &Vector3) -> Option<Vector3> {
        let raw = match self {
            Self::ZCrossTangent => Vector3::z().cross(tangent),
            Self::TangentCrossZ => tangent.cross(&Vector3::z()),
        };
        normalize_xy(&raw)
    }
}

/// Infers the host convention from a single reference wall.
///
/// Computes `Z x tangent`, corrects it for the wall's current flip state,
/// and compares against the wall's known exterior orientation: agreement
/// selects [`TangentConvention::ZCrossTangent`], disagreement the other
/// reading. Degenerate inputs default to `ZCrossTangent`.
#[must_use]
pub fn calibrate(wall: &WallData) -> TangentConvention {
    let Some(tangent) = wall.curve.tangent_xy() else {
        return TangentConvention::default();
    };
    let Some(mut z_cross) = normalize_xy(&Vector3::z().cross(&tangent)) else {
        return TangentConvention::default();
    };
    if wall.flipped {
        z_cross = -z_cross;
    }
    let Some(orientation) = normalize_xy(&wall.orientation) else {
        return TangentConvention::default();
    };
    if z_cross.dot(&orientation) >= 0.0 {
        TangentConvention::ZCrossTangent
    } else {
        tracing::debug!("exterior convention calibrated to tangent-cross-Z");
        TangentConvention::TangentCrossZ
    }
}

/// The exterior direction an unflipped wall on `curve` would have.
#[must_use]
pub fn unflipped_exterior(curve: &Curve, convention: TangentConvention) -> Option<Vector3> {
    convention.exterior_from_tangent(&curve.tangent_xy()?)
}

/// Whether a wall on `curve` must be flipped to face `desired_exterior`.
///
/// Degenerate curves resolve to `false` (leave the wall unflipped).
#[must_use]
pub fn flip_for_exterior(
    curve: &Curve,
    desired_exterior: &Vector3,
    convention: TangentConvention,
) -> bool {
    match unflipped_exterior(curve, convention) {
        Some(unflipped) => unflipped.dot(desired_exterior) < 0.0,
        None => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Line;
    use crate::math::Point3;
    use crate::model::{LevelId, WallTypeId};

    fn wall_along_x(flipped: bool) -> WallData {
        let curve = Curve::Line(
            Line::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)).unwrap(),
        );
        WallData::new(
            curve,
            WallTypeId::default(),
            LevelId::default(),
            3.0,
            0.0,
            flipped,
            false,
        )
    }

    #[test]
    fn native_walls_calibrate_to_z_cross_tangent() {
        assert_eq!(calibrate(&wall_along_x(false)), TangentConvention::ZCrossTangent);
        // A flipped wall still reveals the same underlying convention.
        assert_eq!(calibrate(&wall_along_x(true)), TangentConvention::ZCrossTangent);
    }

    #[test]
    fn reversed_orientation_calibrates_to_tangent_cross_z() {
        let mut wall = wall_along_x(false);
        wall.orientation = -wall.orientation;
        assert_eq!(calibrate(&wall), TangentConvention::TangentCrossZ);
    }

    #[test]
    fn conventions_are_mirror_images() {
        let tangent = Vector3::x();
        let left = TangentConvention::ZCrossTangent
            .exterior_from_tangent(&tangent)
            .unwrap();
        let right = TangentConvention::TangentCrossZ
            .exterior_from_tangent(&tangent)
            .unwrap();
        assert!((left.y - 1.0).abs() < 1e-9);
        assert!((right.y + 1.0).abs() < 1e-9);
    }

    #[test]
    fn flip_resolution_follows_desired_exterior() {
        let curve = Curve::Line(
            Line::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)).unwrap(),
        );
        // Unflipped exterior under Z x v is +Y.
        assert!(!flip_for_exterior(
            &curve,
            &Vector3::y(),
            TangentConvention::ZCrossTangent
        ));
        assert!(flip_for_exterior(
            &curve,
            &-Vector3::y(),
            TangentConvention::ZCrossTangent
        ));
        // The opposite convention inverts both answers.
        assert!(flip_for_exterior(
            &curve,
            &Vector3::y(),
            TangentConvention::TangentCrossZ
        ));
        assert!(!flip_for_exterior(
            &curve,
            &-Vector3::y(),
            TangentConvention::TangentCrossZ
        ));
    }
}
