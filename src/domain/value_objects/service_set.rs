//! Restart service set
//!
//! The named service units that must pick up the new tree. The restart is
//! issued as a single batch command; sibling services (database, cache) are
//! never named and keep running untouched.

use std::fmt;

use crate::error::{FerryError, FerryResult};

/// Non-empty, de-duplicated list of orchestrator service names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSet {
    names: Vec<String>,
}

impl ServiceSet {
    /// Build a set from configured names
    ///
    /// Order is preserved (the orchestrator decides actual restart ordering,
    /// but a stable command line keeps re-runs comparable).
    pub fn new<I, S>(names: I) -> FerryResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for name in names {
            let name: String = name.into();
            let name = name.trim().to_string();
            if name.is_empty() {
                continue;
            }
            if !is_valid_name(&name) {
                return Err(FerryError::InvalidServiceName { name });
            }
            if !deduped.contains(&name) {
                deduped.push(name);
            }
        }
        if deduped.is_empty() {
            return Err(FerryError::EmptyServiceSet);
        }
        Ok(Self { names: deduped })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Display for ServiceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(" "))
    }
}

/// Compose service names: letters, digits, dot, underscore, hyphen
fn is_valid_name(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}
