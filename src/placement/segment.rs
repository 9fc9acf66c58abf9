use crate::geometry::Curve;
use crate::math::Vector3;
use crate::model::{WallId, WallSide};

/// Per-source-wall working record of a placement run.
///
/// The source curve is immutable once captured; the new curve starts as
/// the offset of the source and is rewritten in place by the miter pass.
/// All direction vectors are unit XY vectors.
#[derive(Debug, Clone)]
pub struct Segment {
    /// The source wall this segment was derived from.
    pub source_wall: WallId,
    /// Location curve of the source wall.
    pub source_curve: Curve,
    /// Baseline of the wall to create; updated by the miter pass.
    pub new_curve: Curve,
    /// Direction of the source wall's exterior side.
    pub source_exterior: Vector3,
    /// Side of the source wall the new wall is placed against.
    pub contact_side: WallSide,
    /// Direction from the source wall toward the new wall.
    pub placement_dir: Vector3,
    /// Desired exterior direction of the new wall.
    pub new_exterior: Vector3,
    /// Flip flag resolved from the pre-miter curve.
    pub flip: bool,
    /// Signed centerline-to-centerline distance along `placement_dir`.
    pub offset_along_placement: f64,
}
