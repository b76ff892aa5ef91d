//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and platform implementations. The home page only talks to the outside
//! world through these traits, so every external collaborator can be
//! replaced by a test double.

pub mod app_dirs;
pub mod build_info;
pub mod clipboard;
pub mod errors;
pub mod privileged_service;
pub mod strings;

pub use app_dirs::AppDirsPort;
pub use build_info::BuildInfoPort;
pub use clipboard::ClipboardPort;
pub use errors::{AppDirsError, BuildInfoError, ClipboardError, StringTableError};
pub use privileged_service::{PermissionResultListener, PrivilegedServicePort};
pub use strings::StringsPort;
