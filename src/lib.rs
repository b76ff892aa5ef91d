//! LSPatch manager home screen: bootstrap, CLI and terminal rendering.

pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod render;

pub use bootstrap::wiring::{wire_home, WiredHome};
