//! Host device facts for running outside Android.

use lp_core::device::BuildInfo;
use lp_core::ports::{BuildInfoError, BuildInfoPort};
use sysinfo::System;

/// Describes the machine the manager runs on, mapped onto Android build
/// fields: OS family as manufacturer, distribution as brand, host name as
/// model, OS version as release and kernel version as codename.
#[derive(Debug, Default)]
pub struct HostBuildInfo;

impl HostBuildInfo {
    pub fn new() -> Self {
        Self
    }
}

impl BuildInfoPort for HostBuildInfo {
    fn build_info(&self) -> Result<BuildInfo, BuildInfoError> {
        Ok(BuildInfo {
            manufacturer: std::env::consts::OS.to_string(),
            brand: System::distribution_id(),
            model: System::host_name().unwrap_or_default(),
            release: System::os_version().unwrap_or_default(),
            sdk_int: 0,
            preview_sdk_int: 0,
            codename: System::kernel_version().unwrap_or_default(),
            supported_abis: vec![android_abi(std::env::consts::ARCH).to_string()],
        })
    }
}

/// Android ABI name for a Rust target architecture.
pub(crate) fn android_abi(arch: &str) -> &str {
    match arch {
        "aarch64" => "arm64-v8a",
        "arm" => "armeabi-v7a",
        "x86" => "x86",
        "x86_64" => "x86_64",
        "riscv64" => "riscv64",
        other => other,
    }
}
