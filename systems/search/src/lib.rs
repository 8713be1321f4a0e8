#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Cost-aware best-first search that routes around tower damage.
//!
//! The search expands a min-priority frontier keyed on accumulated damage
//! plus the Manhattan distance to the goal. Edge cost is the damage of the
//! cell being entered, except for the goal cell which is always free. The
//! heuristic bounds step count, not damage, so a returned route is not
//! guaranteed to be the minimum-damage one. Relaxed cells are pushed again
//! without removing their older frontier entries, and every pop, stale or
//! not, counts towards `nodes_explored`.

mod frontier;
mod reconstruct;

pub use reconstruct::{reconstruct, CameFrom};

use std::collections::HashMap;

use log::{debug, trace, warn};
use tower_route_core::{CellCoord, SearchError, SearchOutcome, SearchStats, Topology};
use tower_route_world::{DamageField, Scenario};

use crate::frontier::Frontier;

/// Best-first search bound to a damage field and a grid topology.
///
/// The search borrows both collaborators immutably and allocates its working
/// maps per call, so a single instance can serve any number of queries.
#[derive(Debug)]
pub struct CostAwareSearch<'a, T> {
    field: &'a DamageField,
    topology: T,
}

impl<'a, T: Topology> CostAwareSearch<'a, T> {
    /// Creates a search over the provided damage field and topology.
    #[must_use]
    pub fn new(field: &'a DamageField, topology: T) -> Self {
        Self { field, topology }
    }

    /// Finds a low-damage route from `start` to `goal`.
    ///
    /// Returns [`SearchError::Unreachable`] when the frontier empties before
    /// the goal is popped. `start == goal` succeeds after a single pop with a
    /// zero-cost, single-cell route.
    pub fn find_path(
        &self,
        start: CellCoord,
        goal: CellCoord,
    ) -> Result<SearchOutcome, SearchError> {
        debug!("searching from {start} to {goal}");

        let mut frontier = Frontier::default();
        let mut cost_so_far: HashMap<CellCoord, u64> = HashMap::new();
        let mut came_from = CameFrom::new();
        let mut nodes_explored: u64 = 0;

        frontier.push(0, start);
        let _ = cost_so_far.insert(start, 0);
        let _ = came_from.insert(start, None);

        while let Some(current) = frontier.pop() {
            nodes_explored += 1;

            let Some(&current_cost) = cost_so_far.get(&current) else {
                continue;
            };

            if current == goal {
                let path = reconstruct(&came_from, goal)?;
                let stats = SearchStats::new(nodes_explored, current_cost);
                debug!(
                    "reached {goal} with cost {current_cost} after {nodes_explored} pops, \
                     {} cells on route",
                    path.len()
                );
                return Ok(SearchOutcome { path, stats });
            }

            trace!(
                "expanding {current} at cost {current_cost}, {} entries queued",
                frontier.len()
            );

            for neighbor in self.topology.neighbors(current) {
                let edge_damage = if neighbor == goal {
                    0
                } else {
                    u64::from(self.field.damage_at(neighbor))
                };
                let new_cost = current_cost.saturating_add(edge_damage);

                let improves = cost_so_far
                    .get(&neighbor)
                    .map_or(true, |&known| new_cost < known);
                if !improves {
                    continue;
                }

                let _ = cost_so_far.insert(neighbor, new_cost);
                let priority = new_cost + u64::from(heuristic(neighbor, goal));
                frontier.push(priority, neighbor);
                let _ = came_from.insert(neighbor, Some(current));
            }
        }

        warn!("frontier exhausted after {nodes_explored} pops without reaching {goal}");
        Err(SearchError::Unreachable {
            start,
            goal,
            nodes_explored,
        })
    }
}

/// Manhattan distance between two cells.
///
/// Consistent in step count on a four-connected grid, but not a lower bound
/// on accumulated damage.
#[must_use]
pub fn heuristic(from: CellCoord, to: CellCoord) -> u32 {
    from.manhattan_distance(to)
}

/// Runs a single search against the provided field and topology.
pub fn find_path<T: Topology>(
    start: CellCoord,
    goal: CellCoord,
    field: &DamageField,
    topology: T,
) -> Result<SearchOutcome, SearchError> {
    CostAwareSearch::new(field, topology).find_path(start, goal)
}

/// Routes a validated scenario from its start to its goal.
pub fn find_route(scenario: &Scenario) -> Result<SearchOutcome, SearchError> {
    find_path(
        scenario.start(),
        scenario.goal(),
        scenario.damage_field(),
        scenario.topology(),
    )
}
