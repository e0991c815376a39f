//! `algoviz sort` command

use algoviz_core::error::Result;
use algoviz_core::observe::{Discard, Observer};
use algoviz_core::sort::{ArrayBench, ArrayFrame};
use algoviz_core::stats::RunHistory;
use serde_json::json;

use crate::cli::{OutputFormat, SortArgs};
use crate::commands::control::Playback;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::render::{self, Screen};

/// Execute the sort command
pub fn execute(ctx: &CommandContext, args: &SortArgs) -> Result<()> {
    let mut bench = build_bench(ctx, args)?;
    let delay = ctx.sort_delay()?;
    trace_command!(ctx.cli, ctx.start, "build_array");

    let playback = Playback::start(ctx.animate())?;
    let mut screen = Screen::default();
    let mut discard = Discard;
    let mut history = RunHistory::new();

    for algorithm in args.algorithm.algorithms() {
        let observer: &mut dyn Observer<ArrayFrame> = if playback.is_animated() {
            screen.set_title(format!("{} ({} elements)", algorithm.name(), bench.len()));
            &mut screen
        } else {
            &mut discard
        };
        let stats = bench.run(algorithm, observer, playback.pacer(), delay)?;
        history.push_sort(stats);
    }
    trace_command!(ctx.cli, ctx.start, "run_sorts");

    match ctx.cli.format {
        OutputFormat::Json => output_json(&bench, &history),
        OutputFormat::Human => {
            output_human(ctx, &bench, &history);
            Ok(())
        }
    }
}

fn build_bench(ctx: &CommandContext, args: &SortArgs) -> Result<ArrayBench> {
    if let Some(values) = &args.values {
        return Ok(ArrayBench::from_values(values.clone()));
    }
    let size = args.size.unwrap_or(ctx.config.array_size);
    ArrayBench::seeded(size, args.seed)
}

fn output_json(bench: &ArrayBench, history: &RunHistory) -> Result<()> {
    let runs = history
        .sorts()
        .map(|stats| {
            let mut run = serde_json::to_value(stats)?;
            run["counter"] = json!(render::counter_label(stats.algorithm));
            Ok(run)
        })
        .collect::<Result<Vec<_>>>()?;
    let output = json!({
        "original": bench.original(),
        "sorted": bench.current(),
        "runs": runs,
        "fewest_swaps": history.fewest_swaps(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(ctx: &CommandContext, bench: &ArrayBench, history: &RunHistory) {
    if !ctx.cli.quiet {
        println!("Original: {}", render::values_line(bench.original()));
    }
    println!("Sorted:   {}", render::values_line(bench.current()));
    println!();
    print!("{}", render::sort_table(history.sorts()));

    if !ctx.cli.quiet && history.len() > 1 {
        if let Some(best) = history.fewest_swaps() {
            println!();
            println!("Fewest swaps: {}", best.name());
        }
    }
}
