//! Infrastructure: adapters wiring the ports to real tools
//!
//! Everything here shells out - rsync for the mirrored transfer, ssh for
//! remote commands, docker compose for the restart. Command construction is
//! kept in pure functions so it can be tested without execution.

mod compose;
mod rsync;
mod ssh;

pub use compose::{restart_command, ComposeOrchestrator};
pub use rsync::RsyncTransport;
pub use ssh::SshShell;
