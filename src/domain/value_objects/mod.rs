//! Value objects for the deploy pipeline

mod exclusion_set;
mod ownership;
mod remote_target;
mod service_set;

pub use exclusion_set::{ExclusionSet, BASELINE_EXCLUSIONS, STANDARD_EXCLUSIONS};
pub use ownership::OwnershipSpec;
pub use remote_target::RemoteTarget;
pub use service_set::ServiceSet;
