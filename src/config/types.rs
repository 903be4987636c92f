//! Configuration type definitions
//!
//! Everything a deploy needs is static configuration: target host and root,
//! exclusion extras, ownership normalization, and the restart set. Nothing
//! is required at the call site beyond this structure (the observed design
//! takes no runtime arguments), which is what makes multi-environment reuse
//! and fake-transport testing possible.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FerryResult;

use super::loader::{self, ConfigWarning};

/// Root configuration (`ferry.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub target: TargetConfig,
    pub sync: SyncConfig,
    pub ownership: OwnershipConfig,
    pub services: ServicesConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load from a TOML file, dropping warnings
    pub fn load(path: &Path) -> FerryResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load from a TOML file, collecting unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> FerryResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}

/// `[target]` - the deployment target
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TargetConfig {
    /// SSH host alias or user@host
    pub host: Option<String>,
    /// Remote root path the tree is mirrored into
    pub root: Option<String>,
}

/// `[sync]` - the mirrored transfer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Local tree root
    pub source: PathBuf,
    /// Extra exclusion patterns (the baseline is always applied)
    pub exclude: Vec<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            exclude: Vec::new(),
        }
    }
}

/// `[ownership]` - payload normalization after the sync
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnershipConfig {
    /// Payload subdirectory relative to the remote root
    pub path: String,
    pub user: String,
    pub group: String,
    /// Octal digits, e.g. "755"
    pub mode: String,
}

impl Default for OwnershipConfig {
    fn default() -> Self {
        Self {
            path: "app".to_string(),
            user: "www-data".to_string(),
            group: "www-data".to_string(),
            mode: "755".to_string(),
        }
    }
}

/// `[services]` - the restart set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    /// Service units restarted after a successful sync. Sibling services
    /// not named here are never touched.
    pub restart: Vec<String>,
    /// Compose file passed with -f (orchestrator default when unset)
    pub compose_file: Option<String>,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            restart: vec![
                "web".to_string(),
                "worker".to_string(),
                "scheduler".to_string(),
            ],
            compose_file: None,
        }
    }
}

/// `[output]`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub color: ColorChoice,
}

/// Color handling for human output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}
