//! Rsync transport
//!
//! Mirror-mode transfer: archive attributes, compression, deletion
//! propagation, exclusions applied to relative paths. rsync itself is what
//! makes partial transfers safe - an aborted run leaves a file-consistent
//! tree and a re-run converges to the same end state.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::{TransferOptions, Transport, TransportError};
use crate::domain::value_objects::{ExclusionSet, RemoteTarget};

/// Transport that shells out to rsync over ssh
pub struct RsyncTransport {
    source: PathBuf,
    target: RemoteTarget,
    exclusions: ExclusionSet,
}

impl RsyncTransport {
    pub fn new(source: PathBuf, target: RemoteTarget, exclusions: ExclusionSet) -> Self {
        Self {
            source,
            target,
            exclusions,
        }
    }

    /// Check if rsync is available
    pub fn has_rsync() -> bool {
        Command::new("rsync")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Check if an ssh client is available
    pub fn has_ssh() -> bool {
        // ssh prints usage and exits non-zero with no args; if it runs at
        // all, it is installed
        Command::new("ssh")
            .arg("-V")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    fn args(&self, options: &TransferOptions) -> Vec<String> {
        build_args(&self.source, &self.target, self.exclusions.patterns(), options)
    }
}

/// Build the full rsync argument list
///
/// `-a` preserves permissions/times/symlinks, `-z` compresses, `--delete`
/// gives mirror semantics. The trailing slash on the source means "copy
/// contents", not the directory itself.
fn build_args(
    source: &Path,
    target: &RemoteTarget,
    patterns: &[String],
    options: &TransferOptions,
) -> Vec<String> {
    let mut args = vec!["-az".to_string(), "--delete".to_string()];
    if options.verbose {
        args.push("--progress".to_string());
    }
    for pattern in patterns {
        args.push(format!("--exclude={}", pattern));
    }
    args.push("-e".to_string());
    args.push("ssh".to_string());
    let source = source.display().to_string();
    args.push(format!("{}/", source.trim_end_matches('/')));
    args.push(target.remote_dest());
    args
}

impl Transport for RsyncTransport {
    fn describe(&self) -> String {
        let args = self.args(&TransferOptions::default());
        format!("rsync {}", args.join(" "))
    }

    fn mirror(&self, options: &TransferOptions) -> Result<(), TransportError> {
        if !Self::has_rsync() {
            return Err(TransportError::NotAvailable(
                "rsync is not installed or not in PATH".to_string(),
            ));
        }

        let mut cmd = Command::new("rsync");
        cmd.args(self.args(options))
            .stdin(Stdio::inherit()); // allow ssh auth prompts

        if options.quiet {
            cmd.stdout(Stdio::null());
        } else {
            cmd.stdout(Stdio::inherit());
        }
        cmd.stderr(Stdio::inherit());

        let status = cmd
            .status()
            .map_err(|e| TransportError::Spawn(e.to_string()))?;

        if !status.success() {
            return Err(TransportError::Failed {
                code: status.code(),
            });
        }

        Ok(())
    }
}
