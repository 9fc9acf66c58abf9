use crate::geometry::Curve;
use crate::math::{normalize_xy, Vector3};

use super::level::LevelId;
use super::wall_type::WallTypeId;

slotmap::new_key_type! {
    /// Unique identifier for a wall in the model store.
    pub struct WallId;
}

/// A shell side of a wall's cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    /// The side facing away from the building interior.
    Exterior,
    /// The side facing the building interior.
    Interior,
}

/// One face of a wall's exterior or interior shell surface.
///
/// A side can carry several faces (the main panel plus small returns
/// around openings); the area lets callers prefer the dominant one.
#[derive(Debug, Clone)]
pub struct SideFace {
    /// Outward face normal. May be tilted out of plan.
    pub normal: Vector3,
    /// Planar face area.
    pub area: f64,
}

/// A wall element: a location curve extruded between vertical constraints.
#[derive(Debug, Clone)]
pub struct WallData {
    /// Location curve of the wall centerline.
    pub curve: Curve,
    /// The wall's type.
    pub wall_type: WallTypeId,
    /// Whether the wall is flipped relative to its curve direction.
    pub flipped: bool,
    /// Coarse unit vector pointing toward the wall's exterior side.
    pub orientation: Vector3,
    /// Faces of the exterior shell surface.
    pub exterior_faces: Vec<SideFace>,
    /// Faces of the interior shell surface.
    pub interior_faces: Vec<SideFace>,
    /// Level the wall base is constrained to.
    pub base_level: LevelId,
    /// Offset of the wall base from its level.
    pub base_offset: f64,
    /// Level the wall top is constrained to, if any.
    pub top_level: Option<LevelId>,
    /// Offset of the wall top from its top level.
    pub top_offset: f64,
    /// Explicit height for walls with an unconnected top.
    pub unconnected_height: Option<f64>,
    /// Cached vertical extent of the wall's solid geometry.
    pub bbox_height: Option<f64>,
    /// Whether the wall is load-bearing.
    pub structural: bool,
}

impl WallData {
    /// Creates a wall from a curve with an unconnected top at `height`.
    ///
    /// The orientation and the two shell faces are derived from the curve:
    /// the unflipped exterior is `Z x tangent` (the model's native
    /// convention), negated when `flipped` is set. Degenerate tangents
    /// fall back to +X.
    #[must_use]
    pub fn new(
        curve: Curve,
        wall_type: WallTypeId,
        base_level: LevelId,
        height: f64,
        base_offset: f64,
        flipped: bool,
        structural: bool,
    ) -> Self {
        let tangent = curve.tangent_xy().unwrap_or_else(Vector3::x);
        let unflipped = normalize_xy(&Vector3::z().cross(&tangent)).unwrap_or_else(Vector3::x);
        let orientation = if flipped { -unflipped } else { unflipped };
        let area = curve.length() * height;
        Self {
            curve,
            wall_type,
            flipped,
            orientation,
            exterior_faces: vec![SideFace {
                normal: orientation,
                area,
            }],
            interior_faces: vec![SideFace {
                normal: -orientation,
                area,
            }],
            base_level,
            base_offset,
            top_level: None,
            top_offset: 0.0,
            unconnected_height: Some(height),
            bbox_height: Some(height),
            structural,
        }
    }

    /// Returns the faces of the requested shell side.
    #[must_use]
    pub fn faces(&self, side: WallSide) -> &[SideFace] {
        match side {
            WallSide::Exterior => &self.exterior_faces,
            WallSide::Interior => &self.interior_faces,
        }
    }
}
