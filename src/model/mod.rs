pub mod level;
pub mod transaction;
pub mod wall;
pub mod wall_type;

pub use level::{LevelData, LevelId};
pub use transaction::{CommitStatus, Transaction};
pub use wall::{SideFace, WallData, WallId, WallSide};
pub use wall_type::{WallTypeData, WallTypeId};

use slotmap::{Key, KeyData, SlotMap};

use crate::error::{ModelError, Result};
use crate::geometry::Curve;
use crate::math::TOLERANCE;

/// Central arena that owns all building-model entities.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures and enabling safe mutation. The
/// 64-bit FFI form of a wall key doubles as the id that crosses the RPC
/// boundary.
#[derive(Debug, Default)]
pub struct ModelStore {
    levels: SlotMap<LevelId, LevelData>,
    wall_types: SlotMap<WallTypeId, WallTypeData>,
    walls: SlotMap<WallId, WallData>,
    creation_log: Vec<WallId>,
    read_only: bool,
}

/// Returns the RPC-visible id of a wall key.
#[must_use]
pub fn wall_raw_id(id: WallId) -> u64 {
    id.data().as_ffi()
}

impl ModelStore {
    /// Creates a new, empty model store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Level operations ---

    /// Inserts a level and returns its ID.
    pub fn add_level(&mut self, data: LevelData) -> LevelId {
        self.levels.insert(data)
    }

    /// Returns a reference to the level data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn level(&self, id: LevelId) -> std::result::Result<&LevelData, ModelError> {
        self.levels
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("level".into()))
    }

    // --- Wall type operations ---

    /// Inserts a wall type and returns its ID.
    pub fn add_wall_type(&mut self, data: WallTypeData) -> WallTypeId {
        self.wall_types.insert(data)
    }

    /// Returns a reference to the wall type data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wall_type(&self, id: WallTypeId) -> std::result::Result<&WallTypeData, ModelError> {
        self.wall_types
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("wall type".into()))
    }

    /// Looks a wall type up by numeric id string or by name.
    ///
    /// Tries, in order: the key parsed as a raw id, a case-insensitive
    /// exact name match, and a case-insensitive substring match.
    #[must_use]
    pub fn find_wall_type(&self, key: &str) -> Option<WallTypeId> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        if let Ok(raw) = key.parse::<u64>() {
            let id = WallTypeId::from(KeyData::from_ffi(raw));
            if self.wall_types.contains_key(id) {
                return Some(id);
            }
        }
        let lowered = key.to_lowercase();
        self.wall_types
            .iter()
            .find(|(_, t)| t.name.eq_ignore_ascii_case(key))
            .or_else(|| {
                self.wall_types
                    .iter()
                    .find(|(_, t)| t.name.to_lowercase().contains(&lowered))
            })
            .map(|(id, _)| id)
    }

    // --- Wall operations ---

    /// Inserts a wall directly, bypassing transaction journaling.
    ///
    /// Intended for model setup; engine-driven creation goes through
    /// [`create_wall`](Self::create_wall).
    pub fn add_wall(&mut self, data: WallData) -> WallId {
        self.walls.insert(data)
    }

    /// Returns a reference to the wall data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wall(&self, id: WallId) -> std::result::Result<&WallData, ModelError> {
        self.walls
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("wall".into()))
    }

    /// Returns a mutable reference to the wall data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wall_mut(&mut self, id: WallId) -> std::result::Result<&mut WallData, ModelError> {
        self.walls
            .get_mut(id)
            .ok_or_else(|| ModelError::EntityNotFound("wall".into()))
    }

    /// Resolves an RPC-visible id to a wall key, if it names a live wall.
    #[must_use]
    pub fn wall_from_raw(&self, raw: u64) -> Option<WallId> {
        let id = WallId::from(KeyData::from_ffi(raw));
        self.walls.contains_key(id).then_some(id)
    }

    /// Returns the number of walls in the store.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Creates a wall with an unconnected top and journals it for the
    /// active transaction, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall type or base level does not resolve,
    /// or if the height is not positive.
    #[allow(clippy::too_many_arguments)]
    pub fn create_wall(
        &mut self,
        curve: Curve,
        wall_type: WallTypeId,
        base_level: LevelId,
        height: f64,
        base_offset: f64,
        flipped: bool,
        structural: bool,
    ) -> Result<WallId> {
        if !self.wall_types.contains_key(wall_type) {
            return Err(ModelError::EntityNotFound("wall type".into()).into());
        }
        if !self.levels.contains_key(base_level) {
            return Err(ModelError::EntityNotFound("base level".into()).into());
        }
        if height < TOLERANCE {
            return Err(ModelError::InvalidHeight(height).into());
        }
        let id = self.walls.insert(WallData::new(
            curve,
            wall_type,
            base_level,
            height,
            base_offset,
            flipped,
            structural,
        ));
        self.creation_log.push(id);
        Ok(id)
    }

    // --- Transactions ---

    /// Begins a transaction over this store.
    pub fn begin_transaction(&mut self) -> Transaction<'_> {
        Transaction::new(self)
    }

    /// Marks the store read-only; enforced at transaction commit time.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Returns whether the store is read-only.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn creation_mark(&self) -> usize {
        self.creation_log.len()
    }

    fn rollback_creations(&mut self, mark: usize) {
        while self.creation_log.len() > mark {
            if let Some(id) = self.creation_log.pop() {
                self.walls.remove(id);
            }
        }
    }
}
