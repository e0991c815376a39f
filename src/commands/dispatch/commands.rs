//! Command implementations for all algoviz commands

use algoviz_core::error::Result;

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Sort(args) => crate::commands::sort::execute(ctx, args),
            Commands::Path(args) => crate::commands::path::execute(ctx, args),
            Commands::Config => crate::commands::config::execute(ctx),
        }
    }
}
