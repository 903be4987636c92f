//! Transfer planner
//!
//! Walks the local source tree and applies the exclusion set, producing the
//! file list a mirrored transfer would create on the remote side. Dry runs
//! print this plan; the mirror-correctness tests assert against it.
//!
//! The plan is sorted so repeated runs over an unchanged tree render
//! identically.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ExclusionSet;
use crate::error::{FerryError, FerryResult};

/// Result of planning a mirrored transfer
#[derive(Debug, Clone, Default)]
pub struct TransferPlan {
    /// Files that would exist on the remote after the sync
    pub included: Vec<PathBuf>,
    /// Paths pruned by the exclusion set (directories are not descended)
    pub excluded: Vec<PathBuf>,
}

impl TransferPlan {
    pub fn file_count(&self) -> usize {
        self.included.len()
    }
}

/// Plan the transfer of `source` under the given exclusions
pub fn plan_transfer(source: &Path, exclusions: &ExclusionSet) -> FerryResult<TransferPlan> {
    if !source.is_dir() {
        return Err(FerryError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }
    let mut plan = TransferPlan::default();
    walk(source, source, exclusions, &mut plan)?;
    plan.included.sort();
    plan.excluded.sort();
    Ok(plan)
}

fn walk(
    root: &Path,
    dir: &Path,
    exclusions: &ExclusionSet,
    plan: &mut TransferPlan,
) -> FerryResult<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        let is_dir = file_type.is_dir();
        // read_dir yields children of root, so strip_prefix cannot fail
        let relative = path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());

        if exclusions.is_excluded(&relative, is_dir) {
            plan.excluded.push(relative);
            continue;
        }
        if is_dir {
            walk(root, &path, exclusions, plan)?;
        } else {
            // symlinks transfer as links; the planner lists them as entries
            plan.included.push(relative);
        }
    }
    Ok(())
}
