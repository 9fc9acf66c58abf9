use tracing::debug;

use crate::error::{ModelError, Result};
use crate::math::{normalize_xy, Vector3};
use crate::model::{
    wall_raw_id, ModelStore, WallId, WallTypeData, WallTypeId,
};

use super::chain::order_chain;
use super::convention::{calibrate, flip_for_exterior, TangentConvention};
use super::miter::apply_miter;
use super::normals::{contact_side, exterior_direction, placement_direction};
use super::offset::{offset_curve, placement_offset};
use super::request::{
    FlushWallsRequest, FlushWallsResponse, NewExteriorMode, PlaneRef, SideMode,
};
use super::section::WallSection;
use super::segment::Segment;
use super::vertical::{copy_vertical_constraints, creation_height};

/// Creates flush parallel walls along a chain of source walls.
///
/// The operation never fails with an error: input problems produce a
/// failure response before any mutation, per-wall problems degrade to
/// warnings, and only a failed transaction commit turns partial successes
/// back into an overall failure.
#[derive(Debug)]
pub struct CreateFlushWalls {
    request: FlushWallsRequest,
}

/// Resolved request parameters threaded through segment building.
struct PlacementContext {
    side_mode: SideMode,
    source_plane: PlaneRef,
    new_plane: PlaneRef,
    exterior_mode: NewExteriorMode,
    global_dir: Vector3,
    convention: TangentConvention,
    new_type: WallTypeData,
}

impl CreateFlushWalls {
    /// Creates a new `CreateFlushWalls` operation.
    #[must_use]
    pub fn new(request: FlushWallsRequest) -> Self {
        Self { request }
    }

    /// Executes the operation against the model.
    #[must_use]
    pub fn execute(&self, store: &mut ModelStore) -> FlushWallsResponse {
        let req = &self.request;

        if req.source_wall_ids.is_empty() {
            return FlushWallsResponse::failure("sourceWallIds is empty.");
        }
        let type_key = req.new_wall_type.trim();
        if type_key.is_empty() {
            return FlushWallsResponse::failure("newWallType is required.");
        }
        let Some(new_type_id) = store.find_wall_type(type_key) else {
            return FlushWallsResponse::failure(format!("Wall type not found: {type_key}"));
        };
        let new_type = match store.wall_type(new_type_id) {
            Ok(wall_type) => wall_type.clone(),
            Err(_) => {
                return FlushWallsResponse::failure(format!("Wall type not found: {type_key}"))
            }
        };

        let side_mode = SideMode::parse_or(req.side_mode.as_deref(), SideMode::ByGlobalDirection);
        let source_plane = PlaneRef::parse_or(req.source_plane.as_deref(), PlaneRef::FinishFace);
        let new_plane = PlaneRef::parse_or(req.new_plane.as_deref(), source_plane);
        let exterior_mode = NewExteriorMode::parse_or(
            req.new_exterior_mode.as_deref(),
            NewExteriorMode::MatchSourceExterior,
        );
        let global_dir = req
            .global_direction
            .map(|v| Vector3::new(v[0], v[1], v[2]))
            .and_then(|v| normalize_xy(&v))
            .unwrap_or_else(|| Vector3::new(0.0, -1.0, 0.0));

        let mut warnings: Vec<String> = Vec::new();

        // Collect source walls, best-effort, keeping input order.
        let mut source_walls: Vec<WallId> = Vec::new();
        for &raw in &req.source_wall_ids {
            match store.wall_from_raw(raw) {
                Some(id) => source_walls.push(id),
                None => warnings.push(format!("Not a wall: {raw}")),
            }
        }
        if source_walls.is_empty() {
            return FlushWallsResponse::failure_with("No valid source walls.", warnings);
        }

        // Chain ordering improves mitering when several walls are selected.
        let ordered = order_chain(store, &source_walls, &mut warnings);

        // Calibrate the curve-to-exterior convention once per run, from the
        // first wall of the ordered chain.
        let convention = ordered
            .first()
            .and_then(|&id| store.wall(id).ok())
            .map_or_else(TangentConvention::default, calibrate);
        debug!(?convention, walls = ordered.len(), "placing flush walls");

        if new_type.width <= 0.0 {
            warnings.push(format!("Wall type '{}': width <= 0.", new_type.name));
        }

        let ctx = PlacementContext {
            side_mode,
            source_plane,
            new_plane,
            exterior_mode,
            global_dir,
            convention,
            new_type,
        };

        let mut segments: Vec<Segment> = Vec::new();
        for &wall_id in &ordered {
            if let Some(segment) = build_segment(store, wall_id, &ctx, &mut warnings) {
                segments.push(segment);
            }
        }
        if segments.is_empty() {
            return FlushWallsResponse::failure_with(
                "No segments were built (see warnings).",
                warnings,
            );
        }

        if req.miter_joints && segments.len() >= 2 {
            apply_miter(&mut segments);
        }

        // Create walls, isolating each segment's failure in a sub-scope.
        let copy_constraints = req.copy_vertical_constraints;
        let mut created: Vec<WallId> = Vec::new();
        let mut tx = store.begin_transaction();
        for segment in &segments {
            let raw = wall_raw_id(segment.source_wall);
            let outcome = tx.sub_scope(|model| {
                create_one_wall(
                    model,
                    segment,
                    new_type_id,
                    copy_constraints,
                    ctx.convention,
                    &mut warnings,
                )
            });
            match outcome {
                Ok(id) => created.push(id),
                Err(err) => warnings.push(format!("Create failed (wallId={raw}): {err}")),
            }
        }

        let status = tx.commit();
        if !status.is_committed() {
            return FlushWallsResponse::failure_with(
                format!("Transaction did not commit: {status}"),
                warnings,
            );
        }

        let ok = !created.is_empty();
        let message = if ok {
            format!("Created {} wall(s).", created.len())
        } else {
            "No walls were created (see warnings).".to_owned()
        };
        FlushWallsResponse {
            ok,
            message,
            created_wall_ids: created.into_iter().map(wall_raw_id).collect(),
            warnings,
        }
    }
}

/// Derives one segment from a source wall, or skips it with a warning.
fn build_segment(
    store: &ModelStore,
    wall_id: WallId,
    ctx: &PlacementContext,
    warnings: &mut Vec<String>,
) -> Option<Segment> {
    let raw = wall_raw_id(wall_id);
    let Ok(wall) = store.wall(wall_id) else {
        warnings.push(format!("Wall {raw}: not found."));
        return None;
    };
    let Ok(source_type) = store.wall_type(wall.wall_type) else {
        warnings.push(format!("Wall {raw}: wall type not found."));
        return None;
    };

    let source_exterior = exterior_direction(wall);
    let contact = contact_side(wall, ctx.side_mode, &ctx.global_dir, &source_exterior);
    let placement = placement_direction(wall, raw, contact, &source_exterior, warnings);

    let new_exterior = match ctx.exterior_mode {
        NewExteriorMode::AwayFromSource => placement,
        NewExteriorMode::MatchSourceExterior => source_exterior,
        NewExteriorMode::OppositeSourceExterior => -source_exterior,
    };
    let flip = flip_for_exterior(&wall.curve, &new_exterior, ctx.convention);

    let source_section = WallSection::resolve(source_type, wall.flipped);
    if source_section.total <= 0.0 {
        warnings.push(format!("Wall type '{}': width <= 0.", source_type.name));
    }
    let new_section = WallSection::resolve(&ctx.new_type, flip);

    let offset = placement_offset(
        &source_section,
        ctx.source_plane,
        contact,
        &new_section,
        ctx.new_plane,
        &placement,
        &source_exterior,
        &new_exterior,
    );
    let new_curve = offset_curve(&wall.curve, &placement, offset, warnings);

    Some(Segment {
        source_wall: wall_id,
        source_curve: wall.curve.clone(),
        new_curve,
        source_exterior,
        contact_side: contact,
        placement_dir: placement,
        new_exterior,
        flip,
        offset_along_placement: offset,
    })
}

/// Builds one wall from a finished segment inside a transaction sub-scope.
///
/// The flip flag is re-resolved from the final curve, since the miter pass
/// may have reversed nothing but still moved the endpoints.
fn create_one_wall(
    model: &mut ModelStore,
    segment: &Segment,
    new_type: WallTypeId,
    copy_constraints: bool,
    convention: TangentConvention,
    warnings: &mut Vec<String>,
) -> Result<WallId> {
    let raw = wall_raw_id(segment.source_wall);
    let source = model.wall(segment.source_wall)?;
    let base_level = source.base_level;
    let base_offset = source.base_offset;
    let (height, height_warning) = creation_height(model, source);
    if let Some(warning) = height_warning {
        warnings.push(format!("Wall {raw}: {warning}"));
    }
    model
        .level(base_level)
        .map_err(|_| ModelError::EntityNotFound(format!("base level of wall {raw}")))?;

    let flip = flip_for_exterior(&segment.new_curve, &segment.new_exterior, convention);
    let id = model.create_wall(
        segment.new_curve.clone(),
        new_type,
        base_level,
        height,
        base_offset,
        flip,
        false,
    )?;
    if copy_constraints {
        copy_vertical_constraints(model, segment.source_wall, id)?;
    }
    Ok(id)
}
