use serde::{Deserialize, Serialize};

/// A shell side of a source wall, as selected by the request.
///
/// `ByGlobalDirection` picks whichever side faces the request's global
/// direction most directly; the other two name a side outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SideMode {
    /// Pick the side whose normal best matches the global direction.
    #[default]
    ByGlobalDirection,
    /// Always place against the exterior side.
    ByExterior,
    /// Always place against the interior side.
    ByInterior,
}

impl SideMode {
    /// Parses a mode string case-insensitively, silently falling back to
    /// `default` on blank or unrecognized values.
    #[must_use]
    pub fn parse_or(value: Option<&str>, default: Self) -> Self {
        let Some(s) = value.map(str::trim).filter(|s| !s.is_empty()) else {
            return default;
        };
        if s.eq_ignore_ascii_case("ByGlobalDirection") {
            Self::ByGlobalDirection
        } else if s.eq_ignore_ascii_case("ByExterior") {
            Self::ByExterior
        } else if s.eq_ignore_ascii_case("ByInterior") {
            Self::ByInterior
        } else {
            default
        }
    }
}

/// A reference plane within a wall's cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaneRef {
    /// Outward surface of the selected shell.
    #[default]
    FinishFace,
    /// Boundary between the selected shell and the core.
    CoreFace,
    /// Centerline of the full cross-section.
    WallCenterline,
    /// Centerline of the core layer range.
    CoreCenterline,
}

impl PlaneRef {
    /// Parses a plane string case-insensitively, silently falling back to
    /// `default` on blank or unrecognized values.
    #[must_use]
    pub fn parse_or(value: Option<&str>, default: Self) -> Self {
        let Some(s) = value.map(str::trim).filter(|s| !s.is_empty()) else {
            return default;
        };
        if s.eq_ignore_ascii_case("FinishFace") {
            Self::FinishFace
        } else if s.eq_ignore_ascii_case("CoreFace") {
            Self::CoreFace
        } else if s.eq_ignore_ascii_case("WallCenterline") {
            Self::WallCenterline
        } else if s.eq_ignore_ascii_case("CoreCenterline") {
            Self::CoreCenterline
        } else {
            default
        }
    }
}

/// How the new wall's exterior side is oriented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewExteriorMode {
    /// Exterior faces away from the source wall.
    AwayFromSource,
    /// Exterior faces the same way as the source wall's exterior.
    #[default]
    MatchSourceExterior,
    /// Exterior faces opposite the source wall's exterior.
    OppositeSourceExterior,
}

impl NewExteriorMode {
    /// Parses a mode string case-insensitively, silently falling back to
    /// `default` on blank or unrecognized values.
    #[must_use]
    pub fn parse_or(value: Option<&str>, default: Self) -> Self {
        let Some(s) = value.map(str::trim).filter(|s| !s.is_empty()) else {
            return default;
        };
        if s.eq_ignore_ascii_case("AwayFromSource") {
            Self::AwayFromSource
        } else if s.eq_ignore_ascii_case("MatchSourceExterior") {
            Self::MatchSourceExterior
        } else if s.eq_ignore_ascii_case("OppositeSourceExterior") {
            Self::OppositeSourceExterior
        } else {
            default
        }
    }
}

/// Request shape of the flush-wall placement command.
///
/// This is the one shape that crosses the RPC boundary inbound; all
/// geometry stays internal. Mode fields are free-form strings parsed
/// permissively, so a misspelled mode degrades to its default instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlushWallsRequest {
    /// RPC ids of the source walls.
    pub source_wall_ids: Vec<u64>,
    /// Name or numeric id of the wall type for the new walls.
    pub new_wall_type: String,
    /// Side selection mode; defaults to `ByGlobalDirection`.
    pub side_mode: Option<String>,
    /// Reference plane on the source wall; defaults to `FinishFace`.
    pub source_plane: Option<String>,
    /// Reference plane on the new wall; defaults to the source plane.
    pub new_plane: Option<String>,
    /// Orientation of the new wall's exterior; defaults to
    /// `MatchSourceExterior`.
    pub new_exterior_mode: Option<String>,
    /// Global direction used by `ByGlobalDirection`; defaults to -Y and is
    /// projected to the XY plane.
    pub global_direction: Option<[f64; 3]>,
    /// Trim adjacent straight segments to a shared corner point.
    pub miter_joints: bool,
    /// Copy the source wall's base/top constraints onto the new wall.
    pub copy_vertical_constraints: bool,
}

/// Response shape of the flush-wall placement command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlushWallsResponse {
    /// Overall success: at least one wall created and the commit held.
    pub ok: bool,
    /// Human-readable outcome summary.
    pub message: String,
    /// RPC ids of the created walls.
    pub created_wall_ids: Vec<u64>,
    /// Non-fatal degradations encountered along the way.
    pub warnings: Vec<String>,
}

impl FlushWallsResponse {
    /// A failure response with no warnings.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            created_wall_ids: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// A failure response carrying the warnings gathered so far.
    #[must_use]
    pub fn failure_with(message: impl Into<String>, warnings: Vec<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            created_wall_ids: Vec::new(),
            warnings,
        }
    }
}
