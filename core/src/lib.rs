#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Tower Route engine.
//!
//! This crate defines the value types that flow between the world, the
//! search system and the adapters. The world validates a scenario and
//! exposes a damage field plus a grid topology, the search system consumes
//! both through the [`Topology`] trait and plain [`CellCoord`] values, and
//! adapters read the resulting [`Path`] and [`SearchStats`] without reaching
//! into either crate's internals.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Damage applied by a tower to cells within its short radius.
pub const INNER_ZONE_DAMAGE: u32 = 20;

/// Damage applied by a tower to cells between its short and long radius.
pub const OUTER_ZONE_DAMAGE: u32 = 10;

/// Short radius assigned to towers whose configuration omits one.
pub const DEFAULT_SHORT_RADIUS: u32 = 2;

/// Long radius assigned to towers whose configuration omits one.
pub const DEFAULT_LONG_RADIUS: u32 = 4;

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column().abs_diff(other.column()) + self.row().abs_diff(other.row())
    }

    /// Squared Euclidean distance between the two cell coordinates.
    ///
    /// Each squared axis delta fits in `u64`; their sum saturates at
    /// `u64::MAX`, which still exceeds the square of any `u32` radius.
    #[must_use]
    pub fn distance_squared(self, other: CellCoord) -> u64 {
        let dx = u64::from(self.column().abs_diff(other.column()));
        let dy = u64::from(self.row().abs_diff(other.row()));
        (dx * dx).saturating_add(dy * dy)
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Dimensions of the search grid measured in whole cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    columns: u32,
    rows: u32,
}

impl GridSize {
    /// Creates a new grid size descriptor.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Reports whether the provided cell lies within the grid bounds.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    /// Reports whether the grid holds no cells at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }
}

/// Band of a tower's damage field that a cell falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DamageZone {
    /// Within the short radius.
    Inner,
    /// Beyond the short radius but within the long radius.
    Outer,
    /// Outside the long radius.
    Clear,
}

impl DamageZone {
    /// Damage the zone contributes to a cell.
    #[must_use]
    pub const fn damage(self) -> u32 {
        match self {
            Self::Inner => INNER_ZONE_DAMAGE,
            Self::Outer => OUTER_ZONE_DAMAGE,
            Self::Clear => 0,
        }
    }
}

/// Tower that imposes a two-band circular damage field around its position.
///
/// The short radius never exceeds the long radius; both [`DamageSource::new`]
/// and deserialisation reject inverted radii.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDamageSource")]
pub struct DamageSource {
    position: CellCoord,
    short_radius: u32,
    long_radius: u32,
}

impl DamageSource {
    /// Creates a damage source, rejecting a short radius larger than the long one.
    pub fn new(
        position: CellCoord,
        short_radius: u32,
        long_radius: u32,
    ) -> Result<Self, ConfigError> {
        if short_radius > long_radius {
            return Err(ConfigError::InvertedRadii {
                position,
                short_radius,
                long_radius,
            });
        }

        Ok(Self {
            position,
            short_radius,
            long_radius,
        })
    }

    /// Creates a damage source using the default radii.
    #[must_use]
    pub const fn with_default_radii(position: CellCoord) -> Self {
        Self {
            position,
            short_radius: DEFAULT_SHORT_RADIUS,
            long_radius: DEFAULT_LONG_RADIUS,
        }
    }

    /// Cell the tower is anchored to.
    #[must_use]
    pub const fn position(&self) -> CellCoord {
        self.position
    }

    /// Radius of the 20-damage band measured in cells.
    #[must_use]
    pub const fn short_radius(&self) -> u32 {
        self.short_radius
    }

    /// Radius of the 10-damage band measured in cells.
    #[must_use]
    pub const fn long_radius(&self) -> u32 {
        self.long_radius
    }

    /// Classifies the cell by Euclidean distance from the tower.
    ///
    /// Radii are whole cells, so comparing squared distances against squared
    /// radii is equivalent to comparing the true distances.
    #[must_use]
    pub fn zone_at(&self, cell: CellCoord) -> DamageZone {
        let distance_sq = self.position.distance_squared(cell);
        let short = u64::from(self.short_radius);
        let long = u64::from(self.long_radius);

        if distance_sq <= short * short {
            DamageZone::Inner
        } else if distance_sq <= long * long {
            DamageZone::Outer
        } else {
            DamageZone::Clear
        }
    }

    /// Damage the tower contributes to the provided cell.
    #[must_use]
    pub fn damage_at(&self, cell: CellCoord) -> u32 {
        self.zone_at(cell).damage()
    }
}

#[derive(Deserialize)]
struct RawDamageSource {
    position: CellCoord,
    #[serde(default = "default_short_radius")]
    short_radius: u32,
    #[serde(default = "default_long_radius")]
    long_radius: u32,
}

impl TryFrom<RawDamageSource> for DamageSource {
    type Error = ConfigError;

    fn try_from(raw: RawDamageSource) -> Result<Self, Self::Error> {
        Self::new(raw.position, raw.short_radius, raw.long_radius)
    }
}

const fn default_short_radius() -> u32 {
    DEFAULT_SHORT_RADIUS
}

const fn default_long_radius() -> u32 {
    DEFAULT_LONG_RADIUS
}

/// Up to four neighbouring cells yielded in a fixed direction order.
#[derive(Clone, Debug, Default)]
pub struct Neighbors {
    buffer: [Option<CellCoord>; 4],
    len: usize,
    cursor: usize,
}

impl Neighbors {
    /// Appends a neighbour; cells beyond the fourth are ignored.
    pub fn push(&mut self, cell: CellCoord) {
        if self.len < self.buffer.len() {
            self.buffer[self.len] = Some(cell);
            self.len += 1;
        }
    }
}

impl Iterator for Neighbors {
    type Item = CellCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.len {
            return None;
        }

        let value = self.buffer[self.cursor];
        self.cursor += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.cursor;
        (remaining, Some(remaining))
    }
}

impl FromIterator<CellCoord> for Neighbors {
    fn from_iter<I: IntoIterator<Item = CellCoord>>(iter: I) -> Self {
        let mut neighbors = Self::default();
        for cell in iter {
            neighbors.push(cell);
        }
        neighbors
    }
}

/// Adjacency oracle consulted by the search while expanding the frontier.
///
/// Implementations must yield neighbours in a deterministic order, since the
/// order feeds the frontier's insertion-sequence tie-break.
pub trait Topology {
    /// Cells reachable in a single step from `cell`.
    fn neighbors(&self, cell: CellCoord) -> Neighbors;
}

impl<T: Topology + ?Sized> Topology for &T {
    fn neighbors(&self, cell: CellCoord) -> Neighbors {
        (**self).neighbors(cell)
    }
}

/// Ordered route from a start cell to a goal cell, both inclusive.
///
/// A path always holds at least one cell; serialised form is the bare cell list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<CellCoord>", into = "Vec<CellCoord>")]
pub struct Path {
    cells: Vec<CellCoord>,
}

impl Path {
    /// Wraps the provided cells, returning `None` for an empty sequence.
    #[must_use]
    pub fn from_cells(cells: Vec<CellCoord>) -> Option<Self> {
        if cells.is_empty() {
            None
        } else {
            Some(Self { cells })
        }
    }

    /// Cells composing the route in travel order.
    #[must_use]
    pub fn cells(&self) -> &[CellCoord] {
        &self.cells
    }

    /// Number of cells on the route, including start and goal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Reports whether the path holds no cells, which construction forbids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First cell of the route.
    #[must_use]
    pub fn start(&self) -> CellCoord {
        self.cells[0]
    }

    /// Last cell of the route.
    #[must_use]
    pub fn goal(&self) -> CellCoord {
        self.cells[self.cells.len() - 1]
    }
}

impl TryFrom<Vec<CellCoord>> for Path {
    type Error = EmptyPathError;

    fn try_from(cells: Vec<CellCoord>) -> Result<Self, Self::Error> {
        Self::from_cells(cells).ok_or(EmptyPathError)
    }
}

impl From<Path> for Vec<CellCoord> {
    fn from(path: Path) -> Self {
        path.cells
    }
}

/// Raised when a path is built from an empty cell list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("a path must contain at least one cell")]
pub struct EmptyPathError;

/// Read-only snapshot of the counters gathered by a completed search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchStats {
    nodes_explored: u64,
    total_cost: u64,
}

impl SearchStats {
    /// Creates a stats snapshot.
    #[must_use]
    pub const fn new(nodes_explored: u64, total_cost: u64) -> Self {
        Self {
            nodes_explored,
            total_cost,
        }
    }

    /// Number of frontier pops performed, stale entries included.
    #[must_use]
    pub const fn nodes_explored(&self) -> u64 {
        self.nodes_explored
    }

    /// Cumulative damage accrued along the returned path.
    #[must_use]
    pub const fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Points left from `budget` after paying the path's damage.
    #[must_use]
    pub const fn remaining_points(&self, budget: u64) -> u64 {
        budget.saturating_sub(self.total_cost)
    }
}

/// Successful search result: the route plus its statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Route from start to goal inclusive.
    pub path: Path,
    /// Counters collected while searching.
    pub stats: SearchStats,
}

/// Role a coordinate plays inside a scenario, used in validation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellRole {
    /// Cell the route begins at.
    Start,
    /// Cell the route must reach.
    Goal,
    /// Anchor cell of a tower.
    Tower,
}

impl std::fmt::Display for CellRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Goal => write!(f, "goal"),
            Self::Tower => write!(f, "tower"),
        }
    }
}

/// Reasons a scenario configuration may be rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The grid has zero columns or zero rows.
    #[error("grid must contain at least one cell, got {columns}x{rows}")]
    EmptyGrid {
        /// Configured column count.
        columns: u32,
        /// Configured row count.
        rows: u32,
    },
    /// A coordinate lies outside the configured grid.
    #[error("{role} cell {cell} lies outside the {columns}x{rows} grid")]
    OutOfBounds {
        /// What the coordinate was used for.
        role: CellRole,
        /// Offending coordinate.
        cell: CellCoord,
        /// Configured column count.
        columns: u32,
        /// Configured row count.
        rows: u32,
    },
    /// A tower's short radius exceeds its long radius.
    #[error(
        "tower at {position} has short radius {short_radius} greater than long radius {long_radius}"
    )]
    InvertedRadii {
        /// Tower anchor cell.
        position: CellCoord,
        /// Configured short radius.
        short_radius: u32,
        /// Configured long radius.
        long_radius: u32,
    },
}

/// Reasons a search may fail to produce a route.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The frontier emptied before the goal was reached.
    #[error("no path from {start} to {goal} after exploring {nodes_explored} nodes")]
    Unreachable {
        /// Cell the search began at.
        start: CellCoord,
        /// Cell the search tried to reach.
        goal: CellCoord,
        /// Frontier pops performed before giving up.
        nodes_explored: u64,
    },
    /// The goal was never recorded in the predecessor map.
    #[error("goal {goal} was never discovered")]
    GoalNotDiscovered {
        /// Cell that had no predecessor entry.
        goal: CellCoord,
    },
    /// A predecessor link pointed at a cell missing from the map, or looped.
    #[error("predecessor chain broken at {cell}")]
    BrokenChain {
        /// Cell where the walk could not continue.
        cell: CellCoord,
    },
}

#[cfg(test)]
mod tests {
    use super::{
        CellCoord, ConfigError, DamageSource, DamageZone, GridSize, Neighbors, Path, SearchStats,
    };

    #[test]
    fn manhattan_distance_matches_expectation() {
        let origin = CellCoord::new(1, 1);
        let destination = CellCoord::new(4, 3);
        assert_eq!(origin.manhattan_distance(destination), 5);
        assert_eq!(destination.manhattan_distance(origin), 5);
    }

    #[test]
    fn distance_squared_is_symmetric() {
        let a = CellCoord::new(10, 7);
        let b = CellCoord::new(7, 11);
        assert_eq!(a.distance_squared(b), 25);
        assert_eq!(b.distance_squared(a), 25);
    }

    #[test]
    fn distance_squared_saturates_across_the_widest_grid() {
        let origin = CellCoord::new(0, 0);
        let far = CellCoord::new(u32::MAX - 1, u32::MAX - 1);
        assert_eq!(origin.distance_squared(far), u64::MAX);

        let tower = DamageSource::new(origin, u32::MAX, u32::MAX).expect("valid radii");
        assert_eq!(tower.zone_at(far), DamageZone::Clear);
    }

    #[test]
    fn grid_size_bounds_are_half_open() {
        let size = GridSize::new(20, 15);
        assert!(size.contains(CellCoord::new(0, 0)));
        assert!(size.contains(CellCoord::new(19, 14)));
        assert!(!size.contains(CellCoord::new(20, 0)));
        assert!(!size.contains(CellCoord::new(0, 15)));
        assert!(GridSize::new(0, 4).is_empty());
    }

    #[test]
    fn damage_source_rejects_inverted_radii() {
        let position = CellCoord::new(3, 3);
        assert_eq!(
            DamageSource::new(position, 5, 2),
            Err(ConfigError::InvertedRadii {
                position,
                short_radius: 5,
                long_radius: 2,
            })
        );
        assert!(DamageSource::new(position, 2, 2).is_ok());
    }

    #[test]
    fn zones_follow_euclidean_distance() {
        let tower = DamageSource::with_default_radii(CellCoord::new(10, 7));

        assert_eq!(tower.zone_at(CellCoord::new(10, 7)), DamageZone::Inner);
        assert_eq!(tower.zone_at(CellCoord::new(12, 7)), DamageZone::Inner);
        // (1, 2) offset sits at sqrt(5) > 2 even though it is three steps away.
        assert_eq!(tower.zone_at(CellCoord::new(11, 9)), DamageZone::Outer);
        assert_eq!(tower.zone_at(CellCoord::new(14, 7)), DamageZone::Outer);
        // (3, 3) offset is sqrt(18) > 4: circular, not diamond shaped.
        assert_eq!(tower.zone_at(CellCoord::new(13, 10)), DamageZone::Clear);
        assert_eq!(tower.zone_at(CellCoord::new(15, 7)), DamageZone::Clear);
    }

    #[test]
    fn deserialising_applies_default_radii_and_validates() {
        let json = r#"{"position":{"column":4,"row":1}}"#;
        let tower: DamageSource = serde_json::from_str(json).expect("deserialize");
        assert_eq!(tower.short_radius(), 2);
        assert_eq!(tower.long_radius(), 4);

        let inverted = r#"{"position":{"column":4,"row":1},"short_radius":6,"long_radius":3}"#;
        assert!(serde_json::from_str::<DamageSource>(inverted).is_err());
    }

    #[test]
    fn neighbors_cap_at_four_entries() {
        let neighbors: Neighbors = (0..6).map(|column| CellCoord::new(column, 0)).collect();
        assert_eq!(neighbors.count(), 4);
    }

    #[test]
    fn path_rejects_empty_sequences() {
        assert!(Path::from_cells(Vec::new()).is_none());

        let path = Path::from_cells(vec![CellCoord::new(0, 0), CellCoord::new(1, 0)])
            .expect("non-empty path");
        assert_eq!(path.start(), CellCoord::new(0, 0));
        assert_eq!(path.goal(), CellCoord::new(1, 0));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn path_survives_bincode_transfer() {
        let path = Path::from_cells(vec![
            CellCoord::new(0, 7),
            CellCoord::new(1, 7),
            CellCoord::new(1, 8),
        ])
        .expect("non-empty path");
        let bytes = bincode::serialize(&path).expect("serialize");
        let restored: Path = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(restored, path);

        let empty = bincode::serialize(&Vec::<CellCoord>::new()).expect("serialize");
        assert!(bincode::deserialize::<Path>(&empty).is_err());
    }

    #[test]
    fn remaining_points_saturates() {
        let stats = SearchStats::new(42, 30);
        assert_eq!(stats.remaining_points(100), 70);
        assert_eq!(stats.remaining_points(20), 0);
    }
}
