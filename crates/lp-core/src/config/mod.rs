//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - ✅ Define configuration data structures
//! - ✅ Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! ❌ **No business logic or policies**
//! ❌ **No validation logic**
//!
//! Missing keys map to empty values. Empty is a valid fact, not an error.

mod app_config;
mod version;

pub use app_config::{AppConfig, BrokerConfig};
pub use version::VersionConfig;
