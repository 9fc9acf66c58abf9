slotmap::new_key_type! {
    /// Unique identifier for a wall type in the model store.
    pub struct WallTypeId;
}

/// A wall type: a named cross-section of ordered material layers.
///
/// Layers are ordered from the exterior side to the interior side. The
/// `core` range marks the structural layers; layers before it form the
/// exterior shell, layers after it the interior shell. Simple types have
/// no layer data at all and only a total width.
#[derive(Debug, Clone)]
pub struct WallTypeData {
    /// Display name of the wall type.
    pub name: String,
    /// Total cross-section width.
    pub width: f64,
    /// Layer widths, exterior first. Empty for simple (non-layered) types.
    pub layer_widths: Vec<f64>,
    /// Inclusive `(first, last)` indices of the core layer range.
    pub core: Option<(usize, usize)>,
}

impl WallTypeData {
    /// Creates a simple wall type with no layer data.
    #[must_use]
    pub fn basic(name: impl Into<String>, width: f64) -> Self {
        Self {
            name: name.into(),
            width,
            layer_widths: Vec::new(),
            core: None,
        }
    }

    /// Creates a layered wall type; the total width is the layer sum.
    #[must_use]
    pub fn layered(
        name: impl Into<String>,
        layer_widths: Vec<f64>,
        core: Option<(usize, usize)>,
    ) -> Self {
        let width = layer_widths.iter().sum();
        Self {
            name: name.into(),
            width,
            layer_widths,
            core,
        }
    }
}
