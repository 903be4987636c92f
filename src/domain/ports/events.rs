//! Deploy event sink
//!
//! The use case emits events as it moves through the pipeline; sinks turn
//! them into progress lines or NDJSON. The most recent started step is what
//! identifies a failed stage to the operator.

/// The three pipeline steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStep {
    Sync,
    Permissions,
    Restart,
}

impl DeployStep {
    /// Stable machine-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Permissions => "permissions",
            Self::Restart => "restart",
        }
    }

    /// 1-based position for "[n/3]" progress lines
    pub fn position(&self) -> usize {
        match self {
            Self::Sync => 1,
            Self::Permissions => 2,
            Self::Restart => 3,
        }
    }

    pub const COUNT: usize = 3;
}

/// Events emitted during a deploy
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// A step is about to run (printed BEFORE the step, per the fail-fast
    /// reporting contract)
    StepStarted { step: DeployStep, detail: String },
    /// The exact command a step runs (or would run, in a dry run)
    CommandPlanned { step: DeployStep, command: String },
    /// The step's command returned success
    StepCompleted { step: DeployStep },
    /// Dry run: the step was described but not executed
    StepSkipped { step: DeployStep },
}

/// Trait for receiving deploy events
pub trait DeployEventSink {
    fn emit(&self, event: &DeployEvent);
}

/// Sink that discards everything (tests, library callers)
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn emit(&self, _event: &DeployEvent) {}
}
