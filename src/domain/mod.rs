//! Domain layer: value objects, ports, and services
//!
//! Pure deployment logic with no process or network side effects. The
//! infrastructure layer implements the ports defined here.

pub mod ports;
pub mod services;
pub mod value_objects;
