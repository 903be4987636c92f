use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ferry - deployment synchronizer
#[derive(Parser, Debug)]
#[command(name = "ferry")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'ferry' without arguments to deploy using ./ferry.toml.")]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync the project tree to the remote host and restart its services
    Deploy {
        /// Path to ferry.toml (defaults to ./ferry.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Remote destination override (host:path or user@host:path)
        #[arg(long)]
        remote: Option<String>,

        /// Print the plan and the commands without running anything
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate configuration and environment
    Check {
        /// Path to ferry.toml (defaults to ./ferry.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fail on warnings too (CI mode)
        #[arg(long)]
        strict_warnings: bool,
    },
}
