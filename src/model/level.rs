slotmap::new_key_type! {
    /// Unique identifier for a level in the model store.
    pub struct LevelId;
}

/// A horizontal datum that walls are constrained to.
#[derive(Debug, Clone)]
pub struct LevelData {
    /// Display name of the level.
    pub name: String,
    /// Elevation above the model origin.
    pub elevation: f64,
}

impl LevelData {
    /// Creates a new level.
    #[must_use]
    pub fn new(name: impl Into<String>, elevation: f64) -> Self {
        Self {
            name: name.into(),
            elevation,
        }
    }
}
