//! Configuration loading and types

mod loader;
mod types;


pub use loader::{discover, load_with_warnings, ConfigWarning};
pub use types::{
    ColorChoice, Config, OutputConfig, OwnershipConfig, ServicesConfig, SyncConfig, TargetConfig,
};
