//! Options for the deploy use case

/// Options threaded from the CLI
#[derive(Debug, Clone, Copy, Default)]
pub struct DeployOptions {
    /// Describe every step without executing anything
    pub dry_run: bool,
    /// Suppress tool output on stdout (NDJSON mode)
    pub quiet: bool,
    /// Show transfer progress
    pub verbose: bool,
}
