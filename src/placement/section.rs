use crate::model::WallTypeData;

/// Resolved shell/core widths of a wall type's cross-section.
///
/// When the layer data is valid, `exterior_shell + core + interior_shell`
/// equals `total`. Flipping a wall swaps the two shells and leaves the
/// core untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSection {
    /// Total cross-section width.
    pub total: f64,
    /// Summed width of layers outside the core, exterior side.
    pub exterior_shell: f64,
    /// Summed width of layers outside the core, interior side.
    pub interior_shell: f64,
    /// Summed width of the core layer range.
    pub core: f64,
}

impl WallSection {
    /// Derives section widths from a wall type's layer list.
    ///
    /// Types without layer data, or with an invalid core range, degrade to
    /// an all-core section (shells zero) — the right answer for simple
    /// wall types whose whole width is structural.
    #[must_use]
    pub fn resolve(wall_type: &WallTypeData, flipped: bool) -> Self {
        let total = wall_type.width;
        let layers = &wall_type.layer_widths;

        let valid_core = wall_type
            .core
            .filter(|&(first, last)| first <= last && first < layers.len());

        let (mut exterior_shell, mut interior_shell, mut core) = (0.0, 0.0, 0.0);
        if layers.is_empty() || valid_core.is_none() {
            core = total;
        } else if let Some((first, last)) = valid_core {
            for (i, &width) in layers.iter().enumerate() {
                if i < first {
                    exterior_shell += width;
                } else if i > last {
                    interior_shell += width;
                } else {
                    core += width;
                }
            }
        }

        if flipped {
            std::mem::swap(&mut exterior_shell, &mut interior_shell);
        }

        Self {
            total,
            exterior_shell,
            interior_shell,
            core,
        }
    }
}
