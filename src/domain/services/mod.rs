//! Domain services

mod planner;

pub use planner::{plan_transfer, TransferPlan};
