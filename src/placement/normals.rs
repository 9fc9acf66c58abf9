use std::cmp::Ordering;

use crate::math::{normalize_xy, Vector3};
use crate::model::{WallData, WallSide};

use super::request::SideMode;

/// Resolves the outward unit XY normal of a wall's shell side.
///
/// Among the side's faces the one with the largest planar area wins,
/// which screens out small returns around openings. Returns `None` when
/// the side has no faces or the winning normal has no XY footprint.
#[must_use]
pub fn side_face_normal(wall: &WallData, side: WallSide) -> Option<Vector3> {
    let best = wall
        .faces(side)
        .iter()
        .max_by(|a, b| a.area.partial_cmp(&b.area).unwrap_or(Ordering::Equal))?;
    normalize_xy(&best.normal)
}

/// The source wall's exterior direction, with fallbacks.
///
/// Face normal first, the wall's coarse orientation second, +X as the
/// last resort so downstream math never consumes a zero vector.
#[must_use]
pub fn exterior_direction(wall: &WallData) -> Vector3 {
    side_face_normal(wall, WallSide::Exterior)
        .or_else(|| normalize_xy(&wall.orientation))
        .unwrap_or_else(Vector3::x)
}

/// Decides which side of the source wall the new wall is placed against.
#[must_use]
pub fn contact_side(
    wall: &WallData,
    mode: SideMode,
    global_dir: &Vector3,
    source_exterior: &Vector3,
) -> WallSide {
    match mode {
        SideMode::ByExterior => WallSide::Exterior,
        SideMode::ByInterior => WallSide::Interior,
        SideMode::ByGlobalDirection => {
            if let (Some(n_ext), Some(n_int)) = (
                side_face_normal(wall, WallSide::Exterior),
                side_face_normal(wall, WallSide::Interior),
            ) {
                if n_ext.dot(global_dir) >= n_int.dot(global_dir) {
                    WallSide::Exterior
                } else {
                    WallSide::Interior
                }
            } else if source_exterior.dot(global_dir) >= 0.0 {
                WallSide::Exterior
            } else {
                WallSide::Interior
            }
        }
    }
}

/// Unit XY direction from the source wall toward the new wall.
///
/// The contact side's face normal when it resolves; otherwise the coarse
/// exterior direction (negated for the interior side), with a warning.
#[must_use]
pub fn placement_direction(
    wall: &WallData,
    wall_raw: u64,
    contact: WallSide,
    source_exterior: &Vector3,
    warnings: &mut Vec<String>,
) -> Vector3 {
    if let Some(normal) = side_face_normal(wall, contact) {
        return normal;
    }
    warnings.push(format!(
        "Wall {wall_raw}: failed to get face normal; using orientation fallback."
    ));
    tracing::debug!(wall = wall_raw, "side face normal unresolved; orientation fallback");
    match contact {
        WallSide::Exterior => *source_exterior,
        WallSide::Interior => -*source_exterior,
    }
}
