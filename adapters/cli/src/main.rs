#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that routes a unit through a tower scenario.

mod report;
mod scenario_file;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use tower_route_core::CellCoord;
use tower_route_system_search::find_route;

use crate::report::{AsciiMap, Summary};

/// Finds the least-damage route through a grid guarded by towers.
#[derive(Debug, Parser)]
#[command(name = "tower-route", version)]
struct Args {
    /// TOML scenario file; the built-in reference layout is used when omitted.
    #[arg(long, value_name = "PATH")]
    scenario: Option<PathBuf>,
    /// Overrides the start cell, written as `column,row`.
    #[arg(long, value_name = "CELL", value_parser = parse_cell)]
    start: Option<CellCoord>,
    /// Overrides the goal cell, written as `column,row`.
    #[arg(long, value_name = "CELL", value_parser = parse_cell)]
    goal: Option<CellCoord>,
    /// Prints a character map of the grid with the route overlaid.
    #[arg(long)]
    map: bool,
    /// Raises log verbosity; repeat for more detail. `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Entry point for the Tower Route command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = scenario_file::load(args.scenario.as_deref())?;
    if let Some(start) = args.start {
        config.start = start;
    }
    if let Some(goal) = args.goal {
        config.goal = goal;
    }

    let scenario = config.validate().context("scenario failed validation")?;
    let outcome = find_route(&scenario).with_context(|| {
        format!(
            "could not route from {} to {}",
            scenario.start(),
            scenario.goal()
        )
    })?;

    if args.map {
        println!("{}", AsciiMap::new(&scenario, &outcome));
    }
    print!("{}", Summary::new(&scenario, &outcome));
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn parse_cell(value: &str) -> Result<CellCoord, String> {
    let (column, row) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `column,row`, got `{value}`"))?;
    let column = column
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("invalid column `{column}`: {error}"))?;
    let row = row
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("invalid row `{row}`: {error}"))?;
    Ok(CellCoord::new(column, row))
}
