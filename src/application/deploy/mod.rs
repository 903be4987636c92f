//! Deploy use case: sync, fix permissions, restart

mod options;
mod result;
mod use_case;

#[cfg(test)]
mod tests;

pub use options::DeployOptions;
pub use result::{DeployReport, StepOutcome, StepStatus};
pub use use_case::DeployUseCase;
