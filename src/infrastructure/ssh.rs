//! SSH remote shell
//!
//! Runs one command on the deployment host. Host resolution, identity and
//! auth all come from the operator's own SSH configuration.

use std::process::{Command, Stdio};

use crate::domain::ports::{RemoteShell, ShellError};

/// RemoteShell implementation backed by the system ssh client
#[derive(Debug, Clone)]
pub struct SshShell {
    host: String,
    /// Suppress remote stdout (NDJSON mode keeps stdout machine-readable)
    quiet: bool,
}

impl SshShell {
    pub fn new(host: &str, quiet: bool) -> Self {
        Self {
            host: host.to_string(),
            quiet,
        }
    }
}

impl RemoteShell for SshShell {
    fn host(&self) -> &str {
        &self.host
    }

    fn run(&self, command: &str) -> Result<(), ShellError> {
        let mut cmd = Command::new("ssh");
        cmd.arg(&self.host)
            .arg(command)
            .stdin(Stdio::inherit()); // allow auth prompts

        if self.quiet {
            cmd.stdout(Stdio::null());
        } else {
            cmd.stdout(Stdio::inherit());
        }
        cmd.stderr(Stdio::inherit());

        let status = cmd.status().map_err(|e| ShellError::Spawn(e.to_string()))?;

        if !status.success() {
            return Err(ShellError::Failed {
                command: command.to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
