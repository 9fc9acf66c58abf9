use crate::geometry::Curve;
use crate::math::Vector3;
use crate::model::WallSide;

use super::request::PlaneRef;
use super::section::WallSection;

/// Offsets smaller than this are treated as zero and clone the source curve.
const OFFSET_EPS: f64 = 1e-7;

/// Signed distance from the wall centerline to a reference plane,
/// measured positive toward the exterior side.
#[must_use]
pub fn signed_plane_distance(section: &WallSection, plane: PlaneRef, side: WallSide) -> f64 {
    let half = 0.5 * section.total;
    match plane {
        PlaneRef::WallCenterline => 0.0,
        // A single plane; independent of the requested side.
        PlaneRef::CoreCenterline => 0.5 * (section.interior_shell - section.exterior_shell),
        PlaneRef::FinishFace => match side {
            WallSide::Exterior => half,
            WallSide::Interior => -half,
        },
        // Only the same-side shell is subtracted; this is how core-face
        // references are measured.
        PlaneRef::CoreFace => match side {
            WallSide::Exterior => half - section.exterior_shell,
            WallSide::Interior => -(half - section.interior_shell),
        },
    }
}

/// Signed centerline-to-centerline distance between the source wall and
/// the new wall, along the placement direction.
///
/// Each wall's plane distance is first converted into the shared
/// placement-direction frame by comparing that wall's own exterior
/// direction against the placement direction. The side of the new wall
/// facing the source is the interior when its exterior points along the
/// placement direction, the exterior otherwise.
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn placement_offset(
    source: &WallSection,
    source_plane: PlaneRef,
    contact: WallSide,
    new: &WallSection,
    new_plane: PlaneRef,
    placement: &Vector3,
    source_exterior: &Vector3,
    new_exterior: &Vector3,
) -> f64 {
    let sign_source = if placement.dot(source_exterior) >= 0.0 {
        1.0
    } else {
        -1.0
    };
    let s = signed_plane_distance(source, source_plane, contact) * sign_source;

    let sign_new = if placement.dot(new_exterior) >= 0.0 {
        1.0
    } else {
        -1.0
    };
    let new_contact = if sign_new > 0.0 {
        WallSide::Interior
    } else {
        WallSide::Exterior
    };
    let n = signed_plane_distance(new, new_plane, new_contact) * sign_new;

    s - n
}

/// Builds the new wall's baseline from the source curve and a signed
/// offset along the placement direction.
///
/// Candidates at both `+|d|` and `-|d|` are produced and the one whose
/// midpoint displacement matches the requested sign wins; a lone
/// surviving candidate is used as-is, and when both fail the source curve
/// is cloned (silent geometric degradation, recorded as warnings only).
#[must_use]
pub fn offset_curve(
    source: &Curve,
    placement: &Vector3,
    offset: f64,
    warnings: &mut Vec<String>,
) -> Curve {
    if offset.abs() < OFFSET_EPS {
        return source.clone();
    }

    let dist = offset.abs();
    let positive = match source.offset_xy(dist) {
        Ok(curve) => Some(curve),
        Err(err) => {
            warnings.push(format!("Curve offset (+{dist}) failed: {err}"));
            None
        }
    };
    let negative = match source.offset_xy(-dist) {
        Ok(curve) => Some(curve),
        Err(err) => {
            warnings.push(format!("Curve offset (-{dist}) failed: {err}"));
            None
        }
    };

    match (positive, negative) {
        (None, None) => {
            tracing::debug!("both offset candidates failed; cloning source curve");
            source.clone()
        }
        (Some(curve), None) | (None, Some(curve)) => curve,
        (Some(c1), Some(c2)) => {
            let m0 = source.midpoint();
            let d1 = (c1.midpoint() - m0).dot(placement);
            let d2 = (c2.midpoint() - m0).dot(placement);
            if offset > 0.0 {
                if d1 >= d2 {
                    c1
                } else {
                    c2
                }
            } else if d1 <= d2 {
                c1
            } else {
                c2
            }
        }
    }
}
