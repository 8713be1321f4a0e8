//! Predecessor walk that turns search links into a route.

use std::collections::HashMap;

use tower_route_core::{CellCoord, Path, SearchError};

/// Predecessor links recorded during a search; the start cell maps to `None`.
pub type CameFrom = HashMap<CellCoord, Option<CellCoord>>;

/// Walks predecessor links back from `goal` and returns the start-to-goal route.
///
/// A goal without an entry yields [`SearchError::GoalNotDiscovered`]. A link
/// that points at a cell with no entry of its own, or a chain longer than the
/// map (which can only happen with a cycle), yields
/// [`SearchError::BrokenChain`] instead of a truncated route.
pub fn reconstruct(came_from: &CameFrom, goal: CellCoord) -> Result<Path, SearchError> {
    let mut link = *came_from
        .get(&goal)
        .ok_or(SearchError::GoalNotDiscovered { goal })?;
    let mut cells = vec![goal];

    while let Some(previous) = link {
        if cells.len() >= came_from.len() {
            return Err(SearchError::BrokenChain { cell: previous });
        }

        link = *came_from
            .get(&previous)
            .ok_or(SearchError::BrokenChain { cell: previous })?;
        cells.push(previous);
    }

    cells.reverse();
    Path::from_cells(cells).ok_or(SearchError::GoalNotDiscovered { goal })
}
