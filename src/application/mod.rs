//! Application layer: use cases

pub mod deploy;
