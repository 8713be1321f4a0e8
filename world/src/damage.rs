//! Circular damage field assembled from the scenario's towers.

use tower_route_core::{CellCoord, DamageSource};

/// Sum of every tower's step-function damage, queried per cell.
///
/// The field is immutable once built, so a single instance can back any
/// number of searches without copying the tower set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DamageField {
    sources: Vec<DamageSource>,
}

impl DamageField {
    /// Builds a field from the provided towers.
    #[must_use]
    pub fn from_sources(sources: Vec<DamageSource>) -> Self {
        Self { sources }
    }

    /// Towers contributing to the field, in configuration order.
    #[must_use]
    pub fn sources(&self) -> &[DamageSource] {
        &self.sources
    }

    /// Reports whether the field contains no towers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Total damage a unit takes when stepping onto `cell`.
    ///
    /// Contributions add linearly; overlapping towers are not capped.
    #[must_use]
    pub fn damage_at(&self, cell: CellCoord) -> u32 {
        self.sources
            .iter()
            .map(|source| source.damage_at(cell))
            .fold(0, u32::saturating_add)
    }
}
