//! Process bootstrap: configuration, tracing and dependency wiring.

pub mod config;
pub mod tracing;
pub mod wiring;
