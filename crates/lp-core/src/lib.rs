//! # lp-core
//!
//! Core domain models and ports for the LSPatch manager home.
//!
//! This crate contains pure domain logic without any platform dependencies.

// Public module exports
pub mod app_dirs;
pub mod config;
pub mod device;
pub mod home;
pub mod ids;
pub mod permission;
pub mod ports;
pub mod strings;

// Re-export commonly used types at the crate root
pub use config::{AppConfig, VersionConfig};
pub use device::BuildInfo;
pub use ids::ListenerId;
pub use permission::{PermissionState, RequestCode, ResultCode, StatusKind};
pub use strings::StringKey;
