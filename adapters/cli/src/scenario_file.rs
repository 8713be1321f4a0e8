//! Loading scenario descriptions from TOML files.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use tower_route_world::ScenarioConfig;

/// Reads the scenario at `path`, or the reference layout when no path is given.
pub(crate) fn load(path: Option<&Path>) -> Result<ScenarioConfig> {
    let Some(path) = path else {
        return Ok(ScenarioConfig::default());
    };

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario file at {}", path.display()))?;
    parse(&contents).with_context(|| format!("invalid scenario file {}", path.display()))
}

fn parse(contents: &str) -> Result<ScenarioConfig> {
    toml::from_str(contents).context("failed to parse scenario toml contents")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_uses_reference_layout() {
        let config = load(None).expect("default config");
        assert_eq!(config, ScenarioConfig::default());
    }

    #[test]
    fn shipped_default_matches_builtin_layout() {
        let contents = include_str!("../../../scenarios/default.toml");
        let config = parse(contents).expect("shipped scenario parses");
        assert_eq!(config, ScenarioConfig::default());
    }

    #[test]
    fn single_tower_scenario_uses_default_radii() {
        let contents = include_str!("../../../scenarios/single_tower.toml");
        let config = parse(contents).expect("shipped scenario parses");
        assert_eq!(config.towers.len(), 1);
        assert_eq!(config.towers[0].short_radius(), 2);
        assert_eq!(config.towers[0].long_radius(), 4);
    }

    #[test]
    fn unreadable_file_reports_path() {
        let error = load(Some(Path::new("does/not/exist.toml"))).expect_err("missing file");
        assert!(format!("{error:#}").contains("does/not/exist.toml"));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(parse("columns = \"wide\"").is_err());
    }
}
