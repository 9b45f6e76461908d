//! Path command handler: a single shortest path on an empty grid.

use anyhow::{Context, Result};
use clap::Args;

use gridhaul_lib::routing::select_planner;
use gridhaul_lib::{path_distance, Coord, Error as PlanError, GridBounds, PathAlgorithm};

use gridhaul_cli::output::{OutputFormat, PathReport};

use super::plan::AlgorithmArg;

/// Arguments for the path command.
#[derive(Args, Debug, Clone)]
pub struct PathCommandArgs {
    /// Grid height.
    #[arg(long)]
    pub rows: u32,
    /// Grid width.
    #[arg(long)]
    pub cols: u32,
    /// Start cell as `row,col`.
    #[arg(long, value_parser = parse_coord, allow_hyphen_values = true)]
    pub from: Coord,
    /// Goal cell as `row,col`.
    #[arg(long, value_parser = parse_coord, allow_hyphen_values = true)]
    pub to: Coord,
    #[arg(long, value_enum, default_value_t = AlgorithmArg::AStar)]
    pub algorithm: AlgorithmArg,
}

/// Parse `row,col` into a [`Coord`].
pub fn parse_coord(value: &str) -> std::result::Result<Coord, String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected row,col but got '{value}'"))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("invalid row '{row}': {err}"))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("invalid column '{col}': {err}"))?;
    Ok(Coord::new(row, col))
}

/// Handle the path subcommand.
pub fn handle_path_command(format: OutputFormat, args: &PathCommandArgs) -> Result<()> {
    let bounds = GridBounds::new(args.rows, args.cols).context("invalid grid")?;
    bounds
        .ensure_contains(args.from, "start")
        .and_then(|_| bounds.ensure_contains(args.to, "goal"))
        .context("invalid path endpoints")?;

    let algorithm = PathAlgorithm::from(args.algorithm);
    let cells = select_planner(algorithm)
        .find_path(&bounds, args.from, args.to)
        .ok_or(PlanError::PathNotFound {
            start: args.from,
            goal: args.to,
        })?;

    let report = PathReport {
        algorithm,
        from: args.from,
        to: args.to,
        distance: path_distance(&cells),
        cells,
    };
    format
        .render_path(&report)
        .context("failed to write the path")
}
