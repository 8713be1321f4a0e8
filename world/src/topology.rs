//! Bounded four-connected grid adjacency.

use tower_route_core::{CellCoord, GridSize, Neighbors, Topology};

/// Axis-aligned neighbourhood restricted to the configured grid.
///
/// Neighbours are always produced in the order south (+row), east (+column),
/// north (-row), west (-column).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridTopology {
    size: GridSize,
}

impl GridTopology {
    /// Creates a topology covering the provided grid.
    #[must_use]
    pub const fn new(size: GridSize) -> Self {
        Self { size }
    }

    /// Grid dimensions the topology is bounded by.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }
}

impl Topology for GridTopology {
    fn neighbors(&self, cell: CellCoord) -> Neighbors {
        let mut neighbors = Neighbors::default();
        if !self.size.contains(cell) {
            return neighbors;
        }

        if let Some(row) = cell.row().checked_add(1) {
            if row < self.size.rows() {
                neighbors.push(CellCoord::new(cell.column(), row));
            }
        }

        if let Some(column) = cell.column().checked_add(1) {
            if column < self.size.columns() {
                neighbors.push(CellCoord::new(column, cell.row()));
            }
        }

        if let Some(row) = cell.row().checked_sub(1) {
            neighbors.push(CellCoord::new(cell.column(), row));
        }

        if let Some(column) = cell.column().checked_sub(1) {
            neighbors.push(CellCoord::new(column, cell.row()));
        }

        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(topology: &GridTopology, column: u32, row: u32) -> Vec<CellCoord> {
        topology.neighbors(CellCoord::new(column, row)).collect()
    }

    #[test]
    fn interior_cell_yields_fixed_order() {
        let topology = GridTopology::new(GridSize::new(5, 5));
        assert_eq!(
            collect(&topology, 2, 2),
            vec![
                CellCoord::new(2, 3),
                CellCoord::new(3, 2),
                CellCoord::new(2, 1),
                CellCoord::new(1, 2),
            ]
        );
    }

    #[test]
    fn corners_are_clipped_to_bounds() {
        let topology = GridTopology::new(GridSize::new(4, 3));
        assert_eq!(
            collect(&topology, 0, 0),
            vec![CellCoord::new(0, 1), CellCoord::new(1, 0)]
        );
        assert_eq!(
            collect(&topology, 3, 2),
            vec![CellCoord::new(3, 1), CellCoord::new(2, 2)]
        );
    }

    #[test]
    fn every_neighbor_is_adjacent_and_in_bounds() {
        let size = GridSize::new(6, 4);
        let topology = GridTopology::new(size);

        for row in 0..size.rows() {
            for column in 0..size.columns() {
                let cell = CellCoord::new(column, row);
                let neighbors: Vec<_> = topology.neighbors(cell).collect();
                assert!(!neighbors.is_empty());
                assert!(neighbors.len() <= 4);
                for neighbor in neighbors {
                    assert_ne!(neighbor, cell);
                    assert!(size.contains(neighbor));
                    assert_eq!(neighbor.manhattan_distance(cell), 1);
                }
            }
        }
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let topology = GridTopology::new(GridSize::new(1, 1));
        assert!(collect(&topology, 0, 0).is_empty());
    }

    #[test]
    fn cells_outside_the_grid_have_no_neighbors() {
        let topology = GridTopology::new(GridSize::new(3, 3));
        assert!(collect(&topology, 7, 1).is_empty());
    }
}
