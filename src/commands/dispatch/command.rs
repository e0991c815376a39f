//! Command trait and context for dispatching commands

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use algoviz_core::config::VizConfig;
use algoviz_core::error::Result;
use algoviz_core::step::checked_delay;

use crate::cli::{Cli, OutputFormat};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: VizConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: VizConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Animate only for human output on a terminal.
    pub fn animate(&self) -> bool {
        !self.cli.no_animate
            && !self.cli.quiet
            && self.cli.format == OutputFormat::Human
            && std::io::stdout().is_terminal()
    }

    /// Sorting delay: `--delay` first, then the config file.
    pub fn sort_delay(&self) -> Result<Duration> {
        match self.cli.delay {
            Some(ms) => checked_delay(ms),
            None => self.config.step_delay(),
        }
    }

    /// Traversal delay; `None` leaves each algorithm at its own pace.
    pub fn path_delay(&self) -> Result<Option<Duration>> {
        match self.cli.delay {
            Some(ms) => checked_delay(ms).map(Some),
            None => self.config.path_delay(),
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("algoviz {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-by-step visualizer for sorting and grid pathfinding algorithms.");
        println!();
        println!("Run `algoviz --help` for usage information.");
        Ok(())
    }
}
