//! # lp-platform
//!
//! Platform-specific implementations for the LSPatch manager.
//!
//! This crate contains the adapters behind the `lp-core` ports: the system
//! clipboard, device build facts, the display string table and a
//! process-local privileged broker.

pub mod app_dirs;
pub mod build_info;
pub mod clipboard;
pub mod privileged;
pub mod strings;
