//! Ferry CLI - deployment synchronizer
//!
//! Usage: ferry [COMMAND]
//!
//! Commands:
//!   deploy  Sync the project tree to the remote host and restart services
//!   check   Validate configuration and environment
//!
//! Running `ferry` with no arguments deploys using ./ferry.toml.

use anyhow::Result;
use clap::Parser;

use ferry::cli::{Cli, Commands};
use ferry::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Deploy {
            config,
            remote,
            dry_run,
            yes,
        }) => commands::deploy::run(
            config.as_deref(),
            remote,
            dry_run,
            yes,
            cli.json,
            cli.verbose,
        ),
        Some(Commands::Check {
            config,
            strict_warnings,
        }) => commands::check::run(config.as_deref(), strict_warnings, cli.json),
        // Bare `ferry` is a deploy with defaults.
        None => commands::deploy::run(None, None, false, false, cli.json, cli.verbose),
    }
}
