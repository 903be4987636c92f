//! Ferry - deployment synchronizer
//!
//! Ferry mirrors a local project tree to a remote host, normalizes ownership
//! and permissions on the application payload, and restarts the services that
//! must pick up the new tree. The pipeline is strictly sequential and fails
//! fast: services are never restarted against a partially-synced tree.

pub mod application;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use application::deploy::{DeployOptions, DeployReport, DeployUseCase};
pub use config::Config;
pub use domain::value_objects::{ExclusionSet, OwnershipSpec, RemoteTarget, ServiceSet};
pub use error::{FerryError, FerryResult};
