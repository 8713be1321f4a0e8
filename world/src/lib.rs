#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Validated scenario state for Tower Route.
//!
//! A [`ScenarioConfig`] is plain structured input supplied by an adapter.
//! [`ScenarioConfig::validate`] checks it against the grid bounds and yields
//! an immutable [`Scenario`] that owns the [`DamageField`] and
//! [`GridTopology`] the search consumes.

mod damage;
mod topology;

pub use damage::DamageField;
pub use topology::GridTopology;

use log::debug;
use serde::{Deserialize, Serialize};
use tower_route_core::{CellCoord, CellRole, ConfigError, DamageSource, GridSize};

const DEFAULT_COLUMNS: u32 = 20;
const DEFAULT_ROWS: u32 = 15;
const DEFAULT_STARTING_POINTS: u64 = 100;

const DEFAULT_TOWERS: [CellCoord; 5] = [
    CellCoord::new(5, 3),
    CellCoord::new(10, 8),
    CellCoord::new(15, 5),
    CellCoord::new(8, 10),
    CellCoord::new(3, 7),
];

/// Unvalidated scenario description supplied by adapters.
///
/// Missing fields fall back to the reference layout: a 20x15 grid crossed
/// from the middle of the left edge to the middle of the right edge past
/// five default towers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Number of columns in the grid.
    pub columns: u32,
    /// Number of rows in the grid.
    pub rows: u32,
    /// Cell the route begins at.
    pub start: CellCoord,
    /// Cell the route must reach.
    pub goal: CellCoord,
    /// Points budget the route's damage is deducted from.
    pub starting_points: u64,
    /// Towers projecting damage onto the grid.
    pub towers: Vec<DamageSource>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let middle_row = DEFAULT_ROWS / 2;
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            start: CellCoord::new(0, middle_row),
            goal: CellCoord::new(DEFAULT_COLUMNS - 1, middle_row),
            starting_points: DEFAULT_STARTING_POINTS,
            towers: DEFAULT_TOWERS
                .iter()
                .copied()
                .map(DamageSource::with_default_radii)
                .collect(),
        }
    }
}

impl ScenarioConfig {
    /// Checks every coordinate against the grid and freezes the scenario.
    pub fn validate(self) -> Result<Scenario, ConfigError> {
        let size = GridSize::new(self.columns, self.rows);
        if size.is_empty() {
            return Err(ConfigError::EmptyGrid {
                columns: self.columns,
                rows: self.rows,
            });
        }

        check_bounds(size, CellRole::Start, self.start)?;
        check_bounds(size, CellRole::Goal, self.goal)?;
        for tower in &self.towers {
            check_bounds(size, CellRole::Tower, tower.position())?;
        }

        debug!(
            "validated {}x{} scenario with {} towers, start {} goal {}",
            self.columns,
            self.rows,
            self.towers.len(),
            self.start,
            self.goal
        );

        Ok(Scenario {
            topology: GridTopology::new(size),
            field: DamageField::from_sources(self.towers),
            start: self.start,
            goal: self.goal,
            starting_points: self.starting_points,
        })
    }
}

fn check_bounds(size: GridSize, role: CellRole, cell: CellCoord) -> Result<(), ConfigError> {
    if size.contains(cell) {
        Ok(())
    } else {
        Err(ConfigError::OutOfBounds {
            role,
            cell,
            columns: size.columns(),
            rows: size.rows(),
        })
    }
}

/// Immutable, validated scenario ready to be searched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    topology: GridTopology,
    field: DamageField,
    start: CellCoord,
    goal: CellCoord,
    starting_points: u64,
}

impl Scenario {
    /// Grid dimensions.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.topology.size()
    }

    /// Adjacency used to expand the search frontier.
    #[must_use]
    pub const fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// Damage oracle built from the configured towers.
    #[must_use]
    pub const fn damage_field(&self) -> &DamageField {
        &self.field
    }

    /// Cell the route begins at.
    #[must_use]
    pub const fn start(&self) -> CellCoord {
        self.start
    }

    /// Cell the route must reach.
    #[must_use]
    pub const fn goal(&self) -> CellCoord {
        self.goal
    }

    /// Points budget the route's damage is deducted from.
    #[must_use]
    pub const fn starting_points(&self) -> u64 {
        self.starting_points
    }
}

/// Read-only helpers used by adapters that present search results.
pub mod query {
    use tower_route_core::{CellCoord, DamageZone, Path};

    use crate::{DamageField, Scenario};

    /// Damage a unit takes when stepping onto `cell` in the scenario.
    #[must_use]
    pub fn damage_at(scenario: &Scenario, cell: CellCoord) -> u32 {
        scenario.damage_field().damage_at(cell)
    }

    /// Strongest zone any tower projects onto `cell`.
    #[must_use]
    pub fn strongest_zone(field: &DamageField, cell: CellCoord) -> DamageZone {
        let zones = field.sources().iter().map(|source| source.zone_at(cell));
        let mut strongest = DamageZone::Clear;
        for zone in zones {
            match zone {
                DamageZone::Inner => return DamageZone::Inner,
                DamageZone::Outer => strongest = DamageZone::Outer,
                DamageZone::Clear => {}
            }
        }
        strongest
    }

    /// Damage annotation attached to a single cell of a route.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct DamageLabel {
        /// Cell the label is drawn on.
        pub cell: CellCoord,
        /// Damage taken on that cell.
        pub damage: u32,
    }

    /// Damage labels for the interior of a route.
    ///
    /// The start and goal cells are never labelled, and cells that take no
    /// damage are skipped.
    #[must_use]
    pub fn path_damage_labels(field: &DamageField, path: &Path) -> Vec<DamageLabel> {
        let start = path.start();
        let goal = path.goal();
        path.cells()
            .iter()
            .copied()
            .filter(|&cell| cell != start && cell != goal)
            .filter_map(|cell| {
                let damage = field.damage_at(cell);
                (damage > 0).then_some(DamageLabel { cell, damage })
            })
            .collect()
    }
}
