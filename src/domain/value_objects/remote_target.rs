//! Remote deployment target
//!
//! A host identifier plus the remote root path the tree is mirrored into.
//! The host is an SSH alias or `user@host` resolved through the operator's
//! own SSH configuration; Ferry never handles credentials itself.

use std::fmt;

use crate::error::{FerryError, FerryResult};

/// Remote deployment target: `{host, root}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    /// Remote host (e.g., "prod-server" or "deploy@10.0.0.5")
    host: String,
    /// Remote root path (e.g., "/srv/myapp" or "~/myapp")
    root: String,
}

impl RemoteTarget {
    /// Create a target from host and root path
    pub fn new(host: &str, root: &str) -> FerryResult<Self> {
        let host = host.trim();
        if host.is_empty() {
            return Err(FerryError::InvalidTarget {
                spec: format!("{}:{}", host, root),
                message: "host must not be empty".to_string(),
            });
        }
        let root = root.trim();
        let root = if root.is_empty() { "." } else { root };
        Ok(Self {
            host: host.to_string(),
            root: root.to_string(),
        })
    }

    /// Parse a remote spec
    ///
    /// Format: "host", "host:path" or "user@host:path". A missing path means
    /// the SSH login directory.
    pub fn parse(spec: &str) -> FerryResult<Self> {
        let (host, root) = match spec.split_once(':') {
            Some((h, p)) => (h, p),
            None => (spec, "."),
        };
        Self::new(host, root)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Destination string for the transfer tool ("host:path")
    pub fn remote_dest(&self) -> String {
        format!("{}:{}", self.host, self.root)
    }

    /// Absolute remote path of a subdirectory under the root
    pub fn payload_path(&self, subdir: &str) -> String {
        let subdir = subdir.trim_matches('/');
        if subdir.is_empty() {
            return self.root.clone();
        }
        format!("{}/{}", self.root.trim_end_matches('/'), subdir)
    }
}

impl fmt::Display for RemoteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.remote_dest())
    }
}
