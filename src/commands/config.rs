//! `algoviz config` command

use algoviz_core::config::VizConfig;
use algoviz_core::error::Result;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Print the effective configuration and its source
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let path = VizConfig::config_path()?;
    let exists = path.exists();
    let config = &ctx.config;

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({
                "path": path.display().to_string(),
                "exists": exists,
                "config": config,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                let state = if exists { "" } else { " (not found, using defaults)" };
                println!("Config: {}{}", path.display(), state);
                println!("Source: {}", VizConfig::source_display());
                println!();
            }
            println!("delay_ms      = {}", config.delay_ms);
            println!("array_size    = {}", config.array_size);
            match config.path_delay_ms {
                Some(ms) => println!("path_delay_ms = {}", ms),
                None => println!("path_delay_ms = (per algorithm)"),
            }
            println!("grid.rows     = {}", config.grid.rows);
            println!("grid.cols     = {}", config.grid.cols);
            println!("grid.start    = {}", config.grid.start);
            println!("grid.end      = {}", config.grid.end);
        }
    }
    Ok(())
}
