//! LSPatch manager application layer
//!
//! This crate contains the home page use cases and the permission status
//! monitor. It only depends on `lp-core` ports; platform adapters are
//! injected by the binary.

pub mod usecases;

pub use usecases::home::HomePage;
pub use usecases::permission::{MonitorSession, PermissionStatusMonitor, RequestOutcome};
