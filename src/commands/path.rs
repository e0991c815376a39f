//! `algoviz path` command

use algoviz_core::error::Result;
use algoviz_core::grid::Grid;
use algoviz_core::observe::{Discard, Observer};
use algoviz_core::pathfind::run_traversal;
use algoviz_core::stats::RunHistory;
use serde_json::json;

use crate::cli::{OutputFormat, PathArgs};
use crate::commands::control::Playback;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::render::{self, Screen};

/// Execute the path command
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let mut grid = build_grid(ctx, args)?;
    let delay = ctx.path_delay()?;
    trace_command!(ctx.cli, ctx.start, "build_grid");

    let playback = Playback::start(ctx.animate())?;
    let mut screen = Screen::default();
    let mut discard = Discard;
    let mut history = RunHistory::new();
    let mut finals = Vec::new();

    for kind in args.algorithm.traversals() {
        let observer: &mut dyn Observer<Grid> = if playback.is_animated() {
            screen.set_title(format!(
                "{} from {} to {}",
                kind.name(),
                grid.start(),
                grid.end()
            ));
            &mut screen
        } else {
            &mut discard
        };
        let stats = run_traversal(kind, &mut grid, observer, playback.pacer(), delay)?;
        finals.push((kind, render::grid(&grid)));
        history.push_path(stats);
    }
    trace_command!(ctx.cli, ctx.start, "run_traversals");

    match ctx.cli.format {
        OutputFormat::Json => output_json(&grid, &history),
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                for (kind, drawing) in &finals {
                    println!("{}", kind.name());
                    println!("{}", drawing);
                }
            }
            print!("{}", render::path_table(history.paths()));
            Ok(())
        }
    }
}

/// Grid from config, overridden by flags, with walls toggled in order.
fn build_grid(ctx: &CommandContext, args: &PathArgs) -> Result<Grid> {
    let defaults = &ctx.config.grid;
    let mut grid = Grid::new(
        args.rows.unwrap_or(defaults.rows),
        args.cols.unwrap_or(defaults.cols),
        args.start.unwrap_or(defaults.start),
        args.end.unwrap_or(defaults.end),
    )?;
    for &wall in &args.wall {
        grid.toggle_wall(wall)?;
    }
    Ok(grid)
}

fn output_json(grid: &Grid, history: &RunHistory) -> Result<()> {
    let runs: Vec<_> = history.paths().collect();
    let walls: Vec<_> = grid
        .iter_rows()
        .flatten()
        .filter(|cell| cell.is_wall)
        .map(|cell| cell.position())
        .collect();
    let output = json!({
        "rows": grid.rows(),
        "cols": grid.cols(),
        "start": grid.start(),
        "end": grid.end(),
        "walls": walls,
        "runs": runs,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
