//! Orchestrator port
//!
//! A single restart command naming exactly the services that must pick up
//! the new tree. Whether each named service needs an image rebuild, a
//! process restart, or nothing at all is the orchestrator's decision, as is
//! restart ordering among them.

use thiserror::Error;

use super::remote_shell::ShellError;
use crate::domain::value_objects::ServiceSet;

/// Error from the restart step
#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// The restart command failed on the remote host
    #[error("{0}")]
    Shell(#[from] ShellError),

    /// The orchestrator rejected the request before running anything
    #[error("{0}")]
    Rejected(String),
}

/// Trait for restarting named service units
pub trait Orchestrator: Send + Sync {
    /// Human-readable rendering of the restart command (for dry runs)
    fn describe(&self, services: &ServiceSet) -> String;

    /// Restart exactly the named services, as one batch command
    fn restart(&self, services: &ServiceSet) -> Result<(), OrchestratorError>;
}
