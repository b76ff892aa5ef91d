//! Build and device fact providers.

mod build_prop;
mod host;

pub use build_prop::{BuildPropReader, BuildProps};
pub use host::HostBuildInfo;
