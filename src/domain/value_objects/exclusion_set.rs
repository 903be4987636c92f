//! Transfer exclusion set
//!
//! Path globs that are never transferred in either direction. Matching is
//! gitignore-style against paths relative to the tree root, which lines up
//! with how the transfer tool applies `--exclude` patterns.
//!
//! Invariant: the set always contains the version-control directory and the
//! secrets file. Configuration can only extend the set - removing either of
//! those would risk leaking credentials or history to the deployed artifact.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::{FerryError, FerryResult};

/// Patterns that can never be removed from the set.
pub const BASELINE_EXCLUSIONS: &[&str] = &[".git", ".env"];

/// Default full set for a typical containerized web project.
pub const STANDARD_EXCLUSIONS: &[&str] = &[
    ".git",
    ".env",
    "__pycache__",
    "*.pyc",
    "venv",
    ".DS_Store",
    "*.egg-info",
];

/// Set of path globs excluded from the mirrored transfer
#[derive(Debug)]
pub struct ExclusionSet {
    patterns: Vec<String>,
    matcher: Gitignore,
}

impl ExclusionSet {
    /// The standard set with no extras
    pub fn standard() -> FerryResult<Self> {
        Self::with_extras(&[])
    }

    /// The standard set plus configured extra patterns
    ///
    /// Duplicates are dropped; the baseline is always present. Negation
    /// patterns (`!`) are rejected: they would re-include excluded paths,
    /// and the baseline must hold whatever the configuration says.
    pub fn with_extras(extras: &[String]) -> FerryResult<Self> {
        let mut patterns: Vec<String> = STANDARD_EXCLUSIONS.iter().map(|p| p.to_string()).collect();
        for extra in extras {
            let extra = extra.trim();
            if extra.is_empty() {
                continue;
            }
            if extra.starts_with('!') {
                return Err(FerryError::InvalidPattern {
                    pattern: extra.to_string(),
                    message: "negation patterns would re-include excluded paths".to_string(),
                });
            }
            if !patterns.iter().any(|p| p == extra) {
                patterns.push(extra.to_string());
            }
        }
        let matcher = build_matcher(&patterns)?;
        Ok(Self { patterns, matcher })
    }

    /// Membership check for a single pattern
    pub fn contains(&self, pattern: &str) -> bool {
        self.patterns.iter().any(|p| p == pattern)
    }

    /// All patterns, in insertion order
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether a path (relative to the tree root) matches any pattern
    ///
    /// A path inside an excluded directory is itself excluded.
    pub fn is_excluded(&self, relative: &Path, is_dir: bool) -> bool {
        self.matcher
            .matched_path_or_any_parents(relative, is_dir)
            .is_ignore()
    }
}

fn build_matcher(patterns: &[String]) -> FerryResult<Gitignore> {
    let mut builder = GitignoreBuilder::new("");
    for pattern in patterns {
        builder
            .add_line(None, pattern)
            .map_err(|e| FerryError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
    }
    builder.build().map_err(|e| FerryError::InvalidPattern {
        pattern: String::new(),
        message: e.to_string(),
    })
}
