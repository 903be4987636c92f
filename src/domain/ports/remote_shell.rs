//! Remote shell port
//!
//! One command on the deployment host over the secure remote-shell protocol.
//! The permission-normalization step runs through this port, as does the
//! orchestrator adapter.

use thiserror::Error;

/// Error from a remote command
#[derive(Error, Debug)]
pub enum ShellError {
    /// Could not launch the remote-shell client
    #[error("failed to launch remote shell: {0}")]
    Spawn(String),

    /// Remote command ran and returned non-zero
    #[error("remote command `{command}` exited with {}", display_code(.code))]
    Failed { command: String, code: Option<i32> },
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "a signal".to_string(),
    }
}

/// Trait for running commands on the deployment host
pub trait RemoteShell: Send + Sync {
    /// Host this shell is bound to (for display)
    fn host(&self) -> &str;

    /// Run a command, blocking until it returns a definite status
    fn run(&self, command: &str) -> Result<(), ShellError>;
}
