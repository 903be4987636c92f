//! Error types for Ferry
//!
//! Library errors use `thiserror`; `anyhow` stays at the binary boundary.
//! The deploy pipeline surfaces exactly one error - the first failing step -
//! and never retries or suppresses (fail loud, fail fast).

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ports::{OrchestratorError, ShellError, TransportError};

/// Result type alias for Ferry operations
pub type FerryResult<T> = Result<T, FerryError>;

/// Main error type for Ferry operations
#[derive(Error, Debug)]
pub enum FerryError {
    /// No usable configuration file
    #[error("no configuration found: {message}")]
    ConfigNotFound { message: String },

    /// Config file exists but does not parse
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// No deploy target in config or flags
    #[error("no deploy target - set [target] host in ferry.toml or pass --remote")]
    MissingTarget,

    /// Exclusion glob does not compile
    #[error("invalid exclusion pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Malformed remote spec
    #[error("invalid remote target '{spec}': {message}")]
    InvalidTarget { spec: String, message: String },

    /// Service name with characters the orchestrator would reject
    #[error("invalid service name '{name}' - use letters, digits, '.', '_' or '-'")]
    InvalidServiceName { name: String },

    /// Empty restart set
    #[error("service set is empty - nothing to restart")]
    EmptyServiceSet,

    /// Ownership spec that cannot be rendered into a remote command
    #[error("invalid ownership spec: {message}")]
    InvalidOwnership { message: String },

    /// Local source tree missing
    #[error("source directory not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Step 1 failed; steps 2 and 3 were not attempted
    #[error("sync failed: {0}")]
    Transfer(#[from] TransportError),

    /// Step 2 failed; step 3 was not attempted
    #[error("permission normalization failed: {0}")]
    Permissions(#[source] ShellError),

    /// Step 3 failed; everything before it succeeded
    #[error("service restart failed: {0}")]
    Restart(#[from] OrchestratorError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Operator declined the confirmation prompt
    #[error("deploy aborted by user")]
    Aborted,
}
