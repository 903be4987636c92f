//! Deploy Use Case
//!
//! The pipeline, in strict sequence:
//! 1. Sync - mirror the local tree to the remote root
//! 2. Permissions - normalize ownership/mode on the payload subdirectory
//! 3. Restart - one batch command naming exactly the restart set
//!
//! No step begins until the previous step's command returned a definite
//! success status. There is no rollback: every remote command is idempotent,
//! so after a partial failure the operator fixes the underlying problem and
//! re-runs the whole pipeline, which converges to the same end state.

use chrono::Utc;

use crate::domain::ports::{
    DeployEvent, DeployEventSink, DeployStep, Orchestrator, RemoteShell, TransferOptions,
    Transport,
};
use crate::domain::value_objects::{OwnershipSpec, ServiceSet};
use crate::error::{FerryError, FerryResult};

use super::options::DeployOptions;
use super::result::{DeployReport, StepOutcome, StepStatus};

/// Deploy use case, parameterized by its ports
///
/// Production wires rsync/ssh/compose; tests substitute recording fakes.
pub struct DeployUseCase<T, S, O>
where
    T: Transport,
    S: RemoteShell,
    O: Orchestrator,
{
    transport: T,
    shell: S,
    orchestrator: O,
    ownership: OwnershipSpec,
    payload_path: String,
    services: ServiceSet,
}

impl<T, S, O> DeployUseCase<T, S, O>
where
    T: Transport,
    S: RemoteShell,
    O: Orchestrator,
{
    pub fn new(
        transport: T,
        shell: S,
        orchestrator: O,
        ownership: OwnershipSpec,
        payload_path: String,
        services: ServiceSet,
    ) -> Self {
        Self {
            transport,
            shell,
            orchestrator,
            ownership,
            payload_path,
            services,
        }
    }

    /// Execute the pipeline
    ///
    /// Fails fast: the first error returns immediately and later steps are
    /// never attempted, so services cannot restart against a tree that is
    /// incompletely synced or wrongly owned.
    pub fn execute(
        &self,
        options: &DeployOptions,
        sink: &dyn DeployEventSink,
    ) -> FerryResult<DeployReport> {
        let started_at = Utc::now();
        let mut steps = Vec::with_capacity(DeployStep::COUNT);

        // Step 1 - Sync
        sink.emit(&DeployEvent::StepStarted {
            step: DeployStep::Sync,
            detail: "mirroring project tree".to_string(),
        });
        sink.emit(&DeployEvent::CommandPlanned {
            step: DeployStep::Sync,
            command: self.transport.describe(),
        });
        if options.dry_run {
            steps.push(StepOutcome::new(DeployStep::Sync, StepStatus::Skipped));
            sink.emit(&DeployEvent::StepSkipped {
                step: DeployStep::Sync,
            });
        } else {
            self.transport.mirror(&TransferOptions {
                quiet: options.quiet,
                verbose: options.verbose,
            })?;
            steps.push(StepOutcome::new(DeployStep::Sync, StepStatus::Completed));
            sink.emit(&DeployEvent::StepCompleted {
                step: DeployStep::Sync,
            });
        }

        // Step 2 - Permissions
        let normalize = self.ownership.normalize_command(&self.payload_path);
        sink.emit(&DeployEvent::StepStarted {
            step: DeployStep::Permissions,
            detail: format!("normalizing ownership on {}", self.payload_path),
        });
        sink.emit(&DeployEvent::CommandPlanned {
            step: DeployStep::Permissions,
            command: format!("ssh {} \"{}\"", self.shell.host(), normalize),
        });
        if options.dry_run {
            steps.push(StepOutcome::new(
                DeployStep::Permissions,
                StepStatus::Skipped,
            ));
            sink.emit(&DeployEvent::StepSkipped {
                step: DeployStep::Permissions,
            });
        } else {
            self.shell
                .run(&normalize)
                .map_err(FerryError::Permissions)?;
            steps.push(StepOutcome::new(
                DeployStep::Permissions,
                StepStatus::Completed,
            ));
            sink.emit(&DeployEvent::StepCompleted {
                step: DeployStep::Permissions,
            });
        }

        // Step 3 - Restart
        sink.emit(&DeployEvent::StepStarted {
            step: DeployStep::Restart,
            detail: format!("restarting {}", self.services),
        });
        sink.emit(&DeployEvent::CommandPlanned {
            step: DeployStep::Restart,
            command: self.orchestrator.describe(&self.services),
        });
        if options.dry_run {
            steps.push(StepOutcome::new(DeployStep::Restart, StepStatus::Skipped));
            sink.emit(&DeployEvent::StepSkipped {
                step: DeployStep::Restart,
            });
        } else {
            self.orchestrator.restart(&self.services)?;
            steps.push(StepOutcome::new(DeployStep::Restart, StepStatus::Completed));
            sink.emit(&DeployEvent::StepCompleted {
                step: DeployStep::Restart,
            });
        }

        Ok(DeployReport {
            started_at,
            finished_at: Utc::now(),
            dry_run: options.dry_run,
            steps,
        })
    }
}
