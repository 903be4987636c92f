//! Ports: the seams between the deploy pipeline and the outside world
//!
//! Each step of the pipeline talks to exactly one port. Tests substitute
//! fakes; production wires rsync, ssh and docker compose from the
//! infrastructure layer.

mod events;
mod orchestrator;
mod remote_shell;
mod transport;

pub use events::{DeployEvent, DeployEventSink, DeployStep, NoopEventSink};
pub use orchestrator::{Orchestrator, OrchestratorError};
pub use remote_shell::{RemoteShell, ShellError};
pub use transport::{TransferOptions, Transport, TransportError};
