//! Plain-text presentation of a finished search.

use std::fmt;

use tower_route_core::{CellCoord, DamageZone, SearchOutcome};
use tower_route_world::{query, Scenario};

/// Route summary: endpoints, points budget, exploration counters and damage labels.
pub(crate) struct Summary<'a> {
    scenario: &'a Scenario,
    outcome: &'a SearchOutcome,
}

impl<'a> Summary<'a> {
    pub(crate) fn new(scenario: &'a Scenario, outcome: &'a SearchOutcome) -> Self {
        Self { scenario, outcome }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.outcome.stats;
        let budget = self.scenario.starting_points();

        writeln!(
            f,
            "Route from {} to {} ({} cells)",
            self.scenario.start(),
            self.scenario.goal(),
            self.outcome.path.len()
        )?;
        writeln!(f, "Points lost: {}", stats.total_cost())?;
        writeln!(
            f,
            "Points remaining: {} of {budget}",
            stats.remaining_points(budget)
        )?;
        writeln!(f, "Nodes explored: {}", stats.nodes_explored())?;

        let labels = query::path_damage_labels(self.scenario.damage_field(), &self.outcome.path);
        if labels.is_empty() {
            return writeln!(f, "No damage taken along the route");
        }

        writeln!(f, "Damage along the route:")?;
        for label in labels {
            writeln!(f, "  -{} at {}", label.damage, label.cell)?;
        }
        Ok(())
    }
}

/// Character grid of the scenario with the route overlaid.
///
/// `S` start, `G` goal, `T` tower, `*` route, `#` inner zone, `+` outer zone.
pub(crate) struct AsciiMap<'a> {
    scenario: &'a Scenario,
    route: &'a [CellCoord],
}

impl<'a> AsciiMap<'a> {
    pub(crate) fn new(scenario: &'a Scenario, outcome: &'a SearchOutcome) -> Self {
        Self {
            scenario,
            route: outcome.path.cells(),
        }
    }

    fn glyph(&self, cell: CellCoord) -> char {
        if cell == self.scenario.start() {
            return 'S';
        }
        if cell == self.scenario.goal() {
            return 'G';
        }

        let field = self.scenario.damage_field();
        if field.sources().iter().any(|source| source.position() == cell) {
            return 'T';
        }
        if self.route.contains(&cell) {
            return '*';
        }

        match query::strongest_zone(field, cell) {
            DamageZone::Inner => '#',
            DamageZone::Outer => '+',
            DamageZone::Clear => '.',
        }
    }
}

impl fmt::Display for AsciiMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.scenario.size();
        for row in 0..size.rows() {
            let line: String = (0..size.columns())
                .map(|column| self.glyph(CellCoord::new(column, row)))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_route_core::{DamageSource, Path, SearchStats};
    use tower_route_world::ScenarioConfig;

    fn corridor() -> Scenario {
        ScenarioConfig {
            columns: 5,
            rows: 2,
            start: CellCoord::new(0, 0),
            goal: CellCoord::new(4, 0),
            starting_points: 50,
            towers: vec![DamageSource::new(CellCoord::new(2, 1), 0, 1).expect("valid radii")],
        }
        .validate()
        .expect("corridor is valid")
    }

    fn straight_outcome() -> SearchOutcome {
        SearchOutcome {
            path: Path::from_cells((0..5).map(|column| CellCoord::new(column, 0)).collect())
                .expect("non-empty"),
            stats: SearchStats::new(7, 10),
        }
    }

    #[test]
    fn summary_lists_points_and_labels() {
        let scenario = corridor();
        let outcome = straight_outcome();

        let text = Summary::new(&scenario, &outcome).to_string();

        assert!(text.contains("Route from (0, 0) to (4, 0) (5 cells)"));
        assert!(text.contains("Points lost: 10"));
        assert!(text.contains("Points remaining: 40 of 50"));
        assert!(text.contains("Nodes explored: 7"));
        assert!(text.contains("  -10 at (2, 0)"));
        assert!(!text.contains("at (1, 0)"));
    }

    #[test]
    fn map_marks_endpoints_towers_and_route() {
        let scenario = corridor();
        let outcome = straight_outcome();

        let map = AsciiMap::new(&scenario, &outcome).to_string();

        assert_eq!(map, "S***G\n.+T+.\n");
    }
}
