//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod analyze;
pub mod resolve;
pub mod score;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Analyze(args) => analyze::run(ctx, args),
        Commands::Resolve(args) => resolve::run(ctx, args),
        Commands::Score(args) => score::run(ctx, args),
    }
}

/// Render a confidence in [0, 1] as a percentage.
pub(crate) fn percent(value: f32) -> String {
    format!("{:>3.0}%", value * 100.0)
}
