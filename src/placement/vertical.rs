use crate::error::Result;
use crate::math::TOLERANCE;
use crate::model::{ModelStore, WallData, WallId};

/// Fallback creation height when nothing can be inferred from the source.
pub const DEFAULT_WALL_HEIGHT: f64 = 3000.0;

/// Computes the height a new wall should be created with.
///
/// Preference order: the source's explicit unconnected height, the span
/// between its resolved base and top levels (offsets included), its
/// cached bounding-box height, and finally [`DEFAULT_WALL_HEIGHT`] with a
/// warning. Only positive results are accepted at each step.
#[must_use]
pub fn creation_height(store: &ModelStore, wall: &WallData) -> (f64, Option<String>) {
    if let Some(height) = wall.unconnected_height {
        if height > TOLERANCE {
            return (height, None);
        }
    }

    if let Some(top_level) = wall.top_level {
        if let (Ok(base), Ok(top)) = (store.level(wall.base_level), store.level(top_level)) {
            let height = (top.elevation + wall.top_offset) - (base.elevation + wall.base_offset);
            if height > TOLERANCE {
                return (height, None);
            }
        }
    }

    if let Some(height) = wall.bbox_height {
        if height > TOLERANCE {
            return (height, None);
        }
    }

    (
        DEFAULT_WALL_HEIGHT,
        Some(format!(
            "failed to infer height; using {DEFAULT_WALL_HEIGHT}"
        )),
    )
}

/// Copies the source wall's vertical extent onto the new wall.
///
/// Base level and base offset are always copied. The top follows whichever
/// constraint the source actually uses: a resolvable top level (with its
/// top offset) or the explicit unconnected height.
///
/// # Errors
///
/// Returns an error if either wall does not resolve.
pub fn copy_vertical_constraints(
    store: &mut ModelStore,
    source: WallId,
    target: WallId,
) -> Result<()> {
    let (base_level, base_offset, top_level, top_offset, unconnected_height) = {
        let source = store.wall(source)?;
        (
            source.base_level,
            source.base_offset,
            source.top_level,
            source.top_offset,
            source.unconnected_height,
        )
    };
    let top_resolves = top_level.is_some_and(|id| store.level(id).is_ok());

    let target = store.wall_mut(target)?;
    target.base_level = base_level;
    target.base_offset = base_offset;
    if top_resolves {
        target.top_level = top_level;
        target.top_offset = top_offset;
        target.unconnected_height = None;
    } else if let Some(height) = unconnected_height {
        target.unconnected_height = Some(height);
    }
    Ok(())
}
