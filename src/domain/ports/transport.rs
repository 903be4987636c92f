//! Transport port
//!
//! Mirrored transfer of the local tree to the remote target. The contract is
//! what the pipeline's safety depends on:
//!
//! - mirror semantics: files absent locally are deleted remotely
//! - exclusion patterns are never transferred in either direction
//! - attributes (permissions, timestamps, symlinks) are preserved
//! - re-invocation after a partial transfer converges to the same end state

use thiserror::Error;

/// Error from the transfer step
#[derive(Error, Debug)]
pub enum TransportError {
    /// Transfer tool missing from the operator's machine
    #[error("{0}")]
    NotAvailable(String),

    /// Could not launch the transfer process at all
    #[error("failed to launch transfer: {0}")]
    Spawn(String),

    /// Transfer ran and reported failure (network, auth, disk space)
    #[error("transfer command exited with {}", display_code(.code))]
    Failed { code: Option<i32> },
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "a signal".to_string(),
    }
}

/// Options threaded from the CLI into the transfer
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferOptions {
    /// Suppress tool output (NDJSON mode keeps stdout machine-readable)
    pub quiet: bool,
    /// Show per-file progress
    pub verbose: bool,
}

/// Trait for mirrored tree transfer
pub trait Transport: Send + Sync {
    /// Human-readable rendering of the exact command (for dry runs)
    fn describe(&self) -> String;

    /// Perform the mirrored transfer, blocking until it completes
    fn mirror(&self, options: &TransferOptions) -> Result<(), TransportError>;
}
