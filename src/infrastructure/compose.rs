//! Docker Compose orchestrator
//!
//! Issues one `docker compose up -d --build` naming exactly the services in
//! the restart set. Compose decides per service whether that means an image
//! rebuild, a container restart, or nothing; services not named keep running
//! with their state intact.

use crate::domain::ports::{Orchestrator, OrchestratorError, RemoteShell};
use crate::domain::value_objects::ServiceSet;

/// Orchestrator that runs docker compose on the deployment host
pub struct ComposeOrchestrator<S: RemoteShell> {
    shell: S,
    /// Remote directory holding the compose project
    root: String,
    /// Optional -f override
    compose_file: Option<String>,
}

impl<S: RemoteShell> ComposeOrchestrator<S> {
    pub fn new(shell: S, root: &str, compose_file: Option<String>) -> Self {
        Self {
            shell,
            root: root.to_string(),
            compose_file,
        }
    }

    fn command(&self, services: &ServiceSet) -> String {
        restart_command(&self.root, self.compose_file.as_deref(), services)
    }
}

/// Build the single batch restart command
pub fn restart_command(root: &str, compose_file: Option<&str>, services: &ServiceSet) -> String {
    let mut command = format!("cd {} && docker compose", shell_quote(root));
    if let Some(file) = compose_file {
        command.push_str(&format!(" -f {}", shell_quote(file)));
    }
    command.push_str(" up -d --build");
    for name in services.names() {
        command.push(' ');
        command.push_str(name);
    }
    command
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

impl<S: RemoteShell> Orchestrator for ComposeOrchestrator<S> {
    fn describe(&self, services: &ServiceSet) -> String {
        format!("ssh {} \"{}\"", self.shell.host(), self.command(services))
    }

    fn restart(&self, services: &ServiceSet) -> Result<(), OrchestratorError> {
        if services.is_empty() {
            // ServiceSet construction forbids this; keep the orchestrator
            // honest anyway
            return Err(OrchestratorError::Rejected(
                "refusing to restart an empty service set".to_string(),
            ));
        }
        self.shell.run(&self.command(services))?;
        Ok(())
    }
}
