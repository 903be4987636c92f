//! Deploy pipeline tests with recording fakes
//!
//! A shared call log records every side effect the pipeline performs, in
//! order. The fail-fast tests assert on what is ABSENT from the log after a
//! step failure.

use std::sync::{Arc, Mutex};

use crate::domain::ports::{
    Orchestrator, OrchestratorError, RemoteShell, ShellError, TransferOptions, Transport,
    TransportError,
};
use crate::domain::ports::NoopEventSink;
use crate::domain::value_objects::{OwnershipSpec, ServiceSet};
use crate::error::FerryError;

use super::{DeployOptions, DeployUseCase, StepStatus};

type CallLog = Arc<Mutex<Vec<String>>>;

struct FakeTransport {
    log: CallLog,
    fail: bool,
}

impl Transport for FakeTransport {
    fn describe(&self) -> String {
        "rsync -az --delete src/ host:/srv/app".to_string()
    }

    fn mirror(&self, _options: &TransferOptions) -> Result<(), TransportError> {
        self.log.lock().unwrap().push("mirror".to_string());
        if self.fail {
            return Err(TransportError::Failed { code: Some(255) });
        }
        Ok(())
    }
}

struct FakeShell {
    log: CallLog,
    fail: bool,
}

impl RemoteShell for FakeShell {
    fn host(&self) -> &str {
        "host"
    }

    fn run(&self, command: &str) -> Result<(), ShellError> {
        self.log.lock().unwrap().push(format!("shell: {}", command));
        if self.fail {
            return Err(ShellError::Failed {
                command: command.to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }
}

struct FakeOrchestrator {
    log: CallLog,
    fail: bool,
}

impl Orchestrator for FakeOrchestrator {
    fn describe(&self, services: &ServiceSet) -> String {
        format!("restart {}", services)
    }

    fn restart(&self, services: &ServiceSet) -> Result<(), OrchestratorError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("restart: {}", services));
        if self.fail {
            return Err(OrchestratorError::Shell(ShellError::Failed {
                command: "docker compose up".to_string(),
                code: Some(1),
            }));
        }
        Ok(())
    }
}

struct Harness {
    log: CallLog,
    use_case: DeployUseCase<FakeTransport, FakeShell, FakeOrchestrator>,
}

fn harness(fail_sync: bool, fail_permissions: bool, fail_restart: bool) -> Harness {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let use_case = DeployUseCase::new(
        FakeTransport {
            log: Arc::clone(&log),
            fail: fail_sync,
        },
        FakeShell {
            log: Arc::clone(&log),
            fail: fail_permissions,
        },
        FakeOrchestrator {
            log: Arc::clone(&log),
            fail: fail_restart,
        },
        OwnershipSpec::new("www-data", "www-data", "755").unwrap(),
        "/srv/app/app".to_string(),
        ServiceSet::new(["web", "worker", "scheduler"]).unwrap(),
    );
    Harness { log, use_case }
}

fn calls(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

#[test]
fn pipeline_runs_steps_in_order() {
    let h = harness(false, false, false);
    let report = h
        .use_case
        .execute(&DeployOptions::default(), &NoopEventSink)
        .unwrap();

    assert_eq!(
        calls(&h.log),
        vec![
            "mirror",
            "shell: chown -R www-data:www-data '/srv/app/app' && chmod -R 755 '/srv/app/app'",
            "restart: web worker scheduler",
        ]
    );
    assert!(report.executed());
    assert_eq!(report.steps.len(), 3);
}

#[test]
fn sync_failure_stops_the_pipeline() {
    let h = harness(true, false, false);
    let err = h
        .use_case
        .execute(&DeployOptions::default(), &NoopEventSink)
        .unwrap_err();

    assert!(matches!(err, FerryError::Transfer(_)));
    // neither permission-fixing nor restart was attempted
    assert_eq!(calls(&h.log), vec!["mirror"]);
}

#[test]
fn permission_failure_stops_before_restart() {
    let h = harness(false, true, false);
    let err = h
        .use_case
        .execute(&DeployOptions::default(), &NoopEventSink)
        .unwrap_err();

    assert!(matches!(err, FerryError::Permissions(_)));
    let log = calls(&h.log);
    assert_eq!(log.len(), 2);
    assert_eq!(log[0], "mirror");
    assert!(log[1].starts_with("shell: chown"));
}

#[test]
fn restart_failure_is_the_last_error() {
    let h = harness(false, false, true);
    let err = h
        .use_case
        .execute(&DeployOptions::default(), &NoopEventSink)
        .unwrap_err();

    assert!(matches!(err, FerryError::Restart(_)));
    // everything before the restart already succeeded
    assert_eq!(calls(&h.log).len(), 3);
}

#[test]
fn restart_names_exactly_the_configured_services() {
    let h = harness(false, false, false);
    h.use_case
        .execute(&DeployOptions::default(), &NoopEventSink)
        .unwrap();

    let log = calls(&h.log);
    assert_eq!(log.last().unwrap(), "restart: web worker scheduler");
}

#[test]
fn dry_run_executes_nothing() {
    let h = harness(false, false, false);
    let report = h
        .use_case
        .execute(
            &DeployOptions {
                dry_run: true,
                ..Default::default()
            },
            &NoopEventSink,
        )
        .unwrap();

    assert!(calls(&h.log).is_empty());
    assert!(report.dry_run);
    assert!(!report.executed());
    assert!(report.steps.iter().all(|s| s.status == StepStatus::Skipped));
}

#[test]
fn rerunning_the_pipeline_repeats_the_same_commands() {
    // Idempotence under re-entry: a second run issues the identical command
    // sequence, so converging is the remote side's (idempotent) job.
    let h = harness(false, false, false);
    h.use_case
        .execute(&DeployOptions::default(), &NoopEventSink)
        .unwrap();
    let first = calls(&h.log);
    h.log.lock().unwrap().clear();
    h.use_case
        .execute(&DeployOptions::default(), &NoopEventSink)
        .unwrap();
    let second = calls(&h.log);

    assert_eq!(first, second);
}
