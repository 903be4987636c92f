//! Deploy report
//!
//! A report only exists for pipelines that ran to the end; a failed step
//! surfaces as an error instead, so "report returned" means "every step
//! succeeded" (or was skipped by a dry run).

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::ports::DeployStep;

/// How a step ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    /// Described but not executed (dry run)
    Skipped,
}

/// One step of the pipeline
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub step: &'static str,
    pub status: StepStatus,
}

impl StepOutcome {
    pub(crate) fn new(step: DeployStep, status: StepStatus) -> Self {
        Self {
            step: step.name(),
            status,
        }
    }
}

/// Result of a full pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct DeployReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub dry_run: bool,
    pub steps: Vec<StepOutcome>,
}

impl DeployReport {
    /// True when every step actually executed (not a dry run)
    pub fn executed(&self) -> bool {
        self.steps
            .iter()
            .all(|s| s.status == StepStatus::Completed)
    }
}
